// Text Origin Data Models
// Shared between the Tauri commands, the terminal renderer and the services

use serde::{Deserialize, Serialize};

// ============ Classification ============

/// One `(label, score)` pair as produced by a text-classification model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub model: String,
    pub scores: Vec<LabelScore>,
}

impl ClassificationResult {
    pub fn score_for(&self, label: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.score)
    }
}

// ============ Confidence ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Confidence",
            Self::Medium => "Medium Confidence",
            Self::High => "High Confidence",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Low => "🔴",
            Self::Medium => "🟡",
            Self::High => "🟢",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceIndicator {
    pub name: String,
    pub triggered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceEstimate {
    pub tier: ConfidenceTier,
    /// Fixed set, in display order.
    pub indicators: Vec<ConfidenceIndicator>,
    pub word_count: usize,
    pub margin: f64,
}

impl ConfidenceEstimate {
    pub fn indicator(&self, name: &str) -> Option<bool> {
        self.indicators
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.triggered)
    }
}

// ============ Analysis Report ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorLine {
    pub name: String,
    pub triggered: bool,
    pub mark: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

/// Render model handed to whichever view displays a finished analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub request_id: String,
    pub model: String,
    pub ai_probability: f64,
    pub human_probability: f64,
    pub ai_percent: String,
    pub human_percent: String,
    pub tier: ConfidenceTier,
    pub confidence_label: String,
    pub word_count: usize,
    pub margin: f64,
    pub margin_display: String,
    pub indicators: Vec<IndicatorLine>,
    pub chart: Vec<ChartBar>,
    pub limitations: Vec<String>,
    pub note: String,
    pub latency_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    #[serde(rename_all = "camelCase")]
    EmptyInput { warning: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Report(r) => Some(r),
            Self::EmptyInput { .. } => None,
        }
    }
}
