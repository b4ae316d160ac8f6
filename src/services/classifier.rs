// Classifier Adapter
// Backend-neutral seam between the analyzer and a pretrained text classifier

use std::future::Future;
use std::pin::Pin;

use crate::models::ClassificationResult;
use super::providers::ProviderError;

/// Score used when the model does not report the AI label.
pub const UNCERTAIN_PROBABILITY: f64 = 0.5;

pub type ClassifyFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ClassificationResult, ProviderError>> + Send + 'a>>;

/// A loaded text-classification model. Implementations are built once and
/// shared read-only between requests.
pub trait TextClassifier: Send + Sync {
    /// Model identifier shown in reports.
    fn model_name(&self) -> &str;

    /// Label whose score is the AI probability.
    fn ai_label(&self) -> &str;

    /// Scores for every label the model knows. Callers must not pass empty text.
    fn classify<'a>(&'a self, text: &'a str) -> ClassifyFuture<'a>;
}

/// Read the AI probability from a classification, falling back to 0.5.
pub fn extract_ai_probability(result: &ClassificationResult, ai_label: &str) -> f64 {
    result
        .score_for(ai_label)
        .map(|p| p.clamp(0.0, 1.0))
        .unwrap_or(UNCERTAIN_PROBABILITY)
}

/// `classify(text) -> ai_probability`
pub async fn classify_ai_probability(
    classifier: &dyn TextClassifier,
    text: &str,
) -> Result<f64, ProviderError> {
    let result = classifier.classify(text).await?;
    Ok(extract_ai_probability(&result, classifier.ai_label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabelScore;

    struct FixedClassifier {
        scores: Vec<LabelScore>,
    }

    impl TextClassifier for FixedClassifier {
        fn model_name(&self) -> &str {
            "fixed"
        }

        fn ai_label(&self) -> &str {
            "AI"
        }

        fn classify<'a>(&'a self, _text: &'a str) -> ClassifyFuture<'a> {
            let result = ClassificationResult {
                model: self.model_name().to_string(),
                scores: self.scores.clone(),
            };
            Box::pin(async move { Ok(result) })
        }
    }

    fn score(label: &str, score: f64) -> LabelScore {
        LabelScore { label: label.to_string(), score }
    }

    #[test]
    fn test_extract_present_label() {
        let result = ClassificationResult {
            model: "m".to_string(),
            scores: vec![score("Human", 0.3), score("AI", 0.7)],
        };
        assert_eq!(extract_ai_probability(&result, "AI"), 0.7);
    }

    #[test]
    fn test_extract_missing_label_defaults_to_half() {
        let result = ClassificationResult {
            model: "m".to_string(),
            scores: vec![score("Fake", 0.9), score("Real", 0.1)],
        };
        assert_eq!(extract_ai_probability(&result, "AI"), UNCERTAIN_PROBABILITY);
    }

    #[test]
    fn test_extract_clamps_out_of_range() {
        let result = ClassificationResult {
            model: "m".to_string(),
            scores: vec![score("AI", 1.0000001)],
        };
        assert_eq!(extract_ai_probability(&result, "AI"), 1.0);
    }

    #[tokio::test]
    async fn test_classify_ai_probability() {
        let classifier = FixedClassifier {
            scores: vec![score("AI", 0.25), score("Human", 0.75)],
        };
        let p = classify_ai_probability(&classifier, "some text").await.unwrap();
        assert_eq!(p, 0.25);

        let empty = FixedClassifier { scores: vec![] };
        let p = classify_ai_probability(&empty, "some text").await.unwrap();
        assert_eq!(p, 0.5);
    }
}
