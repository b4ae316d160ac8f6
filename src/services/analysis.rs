// Analysis Service
// Request handler: input check -> classifier -> confidence estimate -> report

use std::time::Instant;

use thiserror::Error;
use tracing::{info, instrument};

use crate::models::AnalysisOutcome;
use super::classifier::{classify_ai_probability, TextClassifier};
use super::confidence::estimate_confidence;
use super::config_store::AppConfig;
use super::providers::{HuggingFaceClassifier, ProviderError};
use super::report::{build_report, EMPTY_INPUT_WARNING};
use super::text_processor::{count_words, is_blank, preview};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("classifier failed: {0}")]
    Classifier(#[from] ProviderError),
}

/// Holds the classifier for the lifetime of the process. Build it once at
/// startup and hand out references.
pub struct Analyzer {
    classifier: Box<dyn TextClassifier>,
}

impl Analyzer {
    pub fn new(classifier: Box<dyn TextClassifier>) -> Self {
        Self { classifier }
    }

    /// Analyzer backed by the hosted model named in `config`.
    pub fn from_config(config: &AppConfig, api_key: Option<String>) -> Result<Self, AnalysisError> {
        let classifier = match config.active_proxy() {
            Some(proxy) => HuggingFaceClassifier::with_proxy(&config.classifier, api_key, proxy)?,
            None => HuggingFaceClassifier::new(&config.classifier, api_key)?,
        };
        Ok(Self::new(Box::new(classifier)))
    }

    pub fn model_name(&self) -> &str {
        self.classifier.model_name()
    }

    #[instrument(skip_all, fields(request_id = tracing::field::Empty))]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisOutcome, AnalysisError> {
        if is_blank(text) {
            info!("analysis.empty_input");
            return Ok(AnalysisOutcome::EmptyInput {
                warning: EMPTY_INPUT_WARNING.to_string(),
            });
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());
        info!(
            words = count_words(text),
            chars = text.chars().count(),
            preview = %preview(text, 60),
            "analysis.start"
        );

        let start = Instant::now();
        let ai_probability = classify_ai_probability(self.classifier.as_ref(), text).await?;
        let latency_ms = start.elapsed().as_millis() as i64;

        let estimate = estimate_confidence(text, ai_probability);

        info!(
            ai_probability,
            margin = estimate.margin,
            tier = estimate.tier.label(),
            latency_ms,
            "analysis.done"
        );

        Ok(AnalysisOutcome::Report(build_report(
            request_id,
            self.classifier.model_name(),
            ai_probability,
            &estimate,
            latency_ms,
        )))
    }
}
