// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "openai-community/roberta-base-openai-detector";
pub const DEFAULT_AI_LABEL: &str = "AI";
pub const HUGGINGFACE_PROVIDER: &str = "huggingface";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    pub proxy: Option<ProxyConfig>,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            proxy: None,
            classifier: ClassifierConfig::default(),
            api_keys: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Proxy URL to use for outgoing requests, if one is enabled.
    pub fn active_proxy(&self) -> Option<&str> {
        let proxy = self.proxy.as_ref().filter(|p| p.enabled)?;
        proxy.https.as_deref().or(proxy.http.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
    pub enabled: bool,
    pub http: Option<String>,
    pub https: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Overrides the hosted inference base URL.
    pub base_url: Option<String>,
    /// Output label whose score is read as the AI probability.
    #[serde(default = "default_ai_label")]
    pub ai_label: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_true")]
    pub wait_for_model: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            ai_label: DEFAULT_AI_LABEL.to_string(),
            timeout_secs: 80,
            wait_for_model: true,
        }
    }
}

fn default_version() -> String { env!("CARGO_PKG_VERSION").to_string() }
fn default_model() -> String { DEFAULT_MODEL.to_string() }
fn default_ai_label() -> String { DEFAULT_AI_LABEL.to_string() }
fn default_timeout_secs() -> u64 { 80 }
fn default_true() -> bool { true }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("textOrigin"))
    }

    /// Store in the default directory, if the platform has one
    pub fn open_default() -> Option<Self> {
        Self::default_config_dir().map(Self::new)
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), String> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| format!("Failed to create config dir: {}", e))
    }

    /// Load configuration from file
    pub fn load(&self) -> Result<AppConfig, String> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| format!("Failed to read config: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), String> {
        self.ensure_dir()?;

        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&self.config_file, content)
            .map_err(|e| format!("Failed to write config: {}", e))
    }

    fn create_backup(&self) -> Result<(), String> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)
            .map_err(|e| format!("Failed to create backup dir: {}", e))?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file)
            .map_err(|e| format!("Failed to create backup: {}", e))?;

        // Keep only last 10 backups
        cleanup_old_backups(&backup_dir, 10)
    }

    /// Get provider API key from config file
    pub fn get_api_key(&self, provider: &str) -> Result<Option<String>, String> {
        let config = self.load()?;
        Ok(config
            .api_keys
            .get(provider)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty()))
    }

    /// Store provider API key in config file
    pub fn set_api_key(&self, provider: &str, key: &str) -> Result<(), String> {
        let key = key.trim();
        if key.is_empty() {
            return Err("API key must not be empty".to_string());
        }
        let mut config = self.load()?;
        config.api_keys.insert(provider.to_string(), key.to_string());
        self.save(&config)
    }
}

/// Remove old backups, keeping only the most recent N
fn cleanup_old_backups(backup_dir: &Path, keep: usize) -> Result<(), String> {
    let mut entries: Vec<_> = fs::read_dir(backup_dir)
        .map_err(|e| format!("Failed to read backup dir: {}", e))?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
        .collect();

    if entries.len() <= keep {
        return Ok(());
    }

    // Oldest first; the timestamped names sort chronologically
    entries.sort_by_key(|e| e.file_name());

    for entry in entries.iter().take(entries.len() - keep) {
        let _ = fs::remove_file(entry.path());
    }

    Ok(())
}
