// Inference Provider Service
// Hosted text-classification calls (Hugging Face inference endpoint)

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{ClassificationResult, LabelScore};
use super::classifier::{ClassifyFuture, TextClassifier};
use super::config_store::{ClassifierConfig, ConfigStore, HUGGINGFACE_PROVIDER};

const HF_DEFAULT_URL: &str = "https://router.huggingface.co/hf-inference/models";
/// Larger than any label set we expect, so every class score comes back.
const ALL_LABELS_TOP_K: u32 = 64;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
    #[error("JSON parse error: {0}")]
    JsonError(String),
    #[error("Inference error in response body: {0}")]
    ErrorBody(String),
}

#[derive(Debug, Clone, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters,
    options: ClassifyOptions,
}

#[derive(Debug, Clone, Serialize)]
struct ClassifyParameters {
    top_k: u32,
}

#[derive(Debug, Clone, Serialize)]
struct ClassifyOptions {
    wait_for_model: bool,
}

/// The endpoint answers either one list per input or a flat list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Batched(Vec<Vec<LabelScore>>),
    Single(Vec<LabelScore>),
    Failed { error: String },
}

/// Decode a classification response body into label scores.
pub fn parse_scores(body: &str) -> Result<Vec<LabelScore>, ProviderError> {
    let parsed: ClassifyResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::JsonError(e.to_string()))?;

    match parsed {
        ClassifyResponse::Batched(mut batches) => {
            if batches.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(batches.swap_remove(0))
            }
        }
        ClassifyResponse::Single(scores) => Ok(scores),
        ClassifyResponse::Failed { error } => Err(ProviderError::ErrorBody(error)),
    }
}

pub struct HuggingFaceClassifier {
    client: Client,
    base_url: String,
    model: String,
    ai_label: String,
    api_key: Option<String>,
    wait_for_model: bool,
}

impl HuggingFaceClassifier {
    pub fn new(config: &ClassifierConfig, api_key: Option<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config, api_key))
    }

    pub fn with_proxy(
        config: &ClassifierConfig,
        api_key: Option<String>,
        proxy_url: &str,
    ) -> Result<Self, ProviderError> {
        let proxy = reqwest::Proxy::all(proxy_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .proxy(proxy)
            .build()?;
        Ok(Self::with_client(client, config, api_key))
    }

    fn with_client(client: Client, config: &ClassifierConfig, api_key: Option<String>) -> Self {
        let base_url = config
            .base_url
            .clone()
            .or_else(|| env::var("HF_INFERENCE_URL").ok().filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| HF_DEFAULT_URL.to_string());

        info!(
            model = %config.model,
            base_url = %base_url,
            ai_label = %config.ai_label,
            authenticated = api_key.is_some(),
            "classifier.configured"
        );

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            ai_label: config.ai_label.clone(),
            api_key,
            wait_for_model: config.wait_for_model,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }

    async fn call_inference_api(&self, text: &str) -> Result<ClassificationResult, ProviderError> {
        let request = ClassifyRequest {
            inputs: text,
            parameters: ClassifyParameters {
                top_k: ALL_LABELS_TOP_K,
            },
            options: ClassifyOptions {
                wait_for_model: self.wait_for_model,
            },
        };

        let start = Instant::now();

        let mut builder = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let scores = parse_scores(&body)?;

        debug!(
            model = %self.model,
            latency_ms = start.elapsed().as_millis() as i64,
            labels = scores.len(),
            "classifier.response"
        );

        Ok(ClassificationResult {
            model: self.model.clone(),
            scores,
        })
    }
}

impl TextClassifier for HuggingFaceClassifier {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn ai_label(&self) -> &str {
        &self.ai_label
    }

    fn classify<'a>(&'a self, text: &'a str) -> ClassifyFuture<'a> {
        Box::pin(self.call_inference_api(text))
    }
}

/// Get API key from environment or config file
pub fn get_api_key(store: Option<&ConfigStore>) -> Option<String> {
    for key in ["HF_TOKEN", "HUGGINGFACE_API_TOKEN", "TEXTORIGIN_HF_TOKEN"] {
        if let Ok(val) = env::var(key) {
            let v = val.trim();
            if !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }

    store.and_then(|s| s.get_api_key(HUGGINGFACE_PROVIDER).ok().flatten())
}
