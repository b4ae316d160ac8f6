// Text Origin Core Services

pub mod analysis;
pub mod classifier;
pub mod confidence;
pub mod config_store;
pub mod providers;
pub mod report;
pub mod text_processor;

pub use analysis::{AnalysisError, Analyzer};
pub use classifier::{classify_ai_probability, extract_ai_probability, TextClassifier};
pub use confidence::{decide_tier, estimate_confidence, prediction_margin};
pub use config_store::{AppConfig, ClassifierConfig, ConfigStore};
pub use providers::{get_api_key, HuggingFaceClassifier, ProviderError};
pub use report::{build_report, limitations, render_text};
