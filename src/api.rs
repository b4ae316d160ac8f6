// Tauri Commands
// Thin bridge between the webview and the analysis services

use serde::Serialize;
use tauri::State;
use tracing::{error, info};

use crate::models::AnalysisOutcome;
use crate::services::config_store::HUGGINGFACE_PROVIDER;
use crate::services::{limitations, AppConfig, Analyzer, ConfigStore};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub model: String,
    pub model_url: String,
}

#[tauri::command]
pub async fn analyze_text(text: String, analyzer: State<'_, Analyzer>) -> Result<AnalysisOutcome, String> {
    analyzer.analyze(&text).await.map_err(|e| {
        error!(error = %e, "analyze_text.failed");
        e.to_string()
    })
}

#[tauri::command]
pub fn get_model_info(analyzer: State<'_, Analyzer>) -> ModelInfo {
    let model = analyzer.model_name().to_string();
    ModelInfo {
        model_url: format!("https://huggingface.co/{}", model),
        model,
    }
}

#[tauri::command]
pub fn get_limitations() -> Vec<String> {
    limitations()
}

#[tauri::command]
pub fn get_config() -> Result<AppConfig, String> {
    match ConfigStore::open_default() {
        Some(store) => store.load(),
        None => Ok(AppConfig::default()),
    }
}

/// Saved settings apply on the next launch; the running analyzer is fixed.
#[tauri::command]
pub fn save_config(config: AppConfig) -> Result<(), String> {
    let store = ConfigStore::open_default().ok_or("No config directory available")?;
    store.save(&config)?;
    info!(path = %store.config_file().display(), "config.saved");
    Ok(())
}

/// Persist the Hugging Face token; used by the next launch's classifier.
#[tauri::command]
pub fn store_api_key(key: String) -> Result<(), String> {
    let store = ConfigStore::open_default().ok_or("No config directory available")?;
    store.set_api_key(HUGGINGFACE_PROVIDER, &key)?;
    info!("api_key.stored");
    Ok(())
}
