// Report Rendering
// Builds the render model and the terminal view of a finished analysis

use std::fmt::Write;

use crate::models::{AnalysisReport, ChartBar, ConfidenceEstimate, IndicatorLine};
use super::text_processor::format_percent;

pub const EMPTY_INPUT_WARNING: &str = "Please enter some text before analysis.";

pub const RESULT_NOTE: &str = "Interpret results with caution. Prediction confidence depends on \
text length and prediction margin.";

pub const LIMITATIONS: [&str; 4] = [
    "This system provides probabilistic estimation, not definitive judgment",
    "Short texts may lead to unreliable predictions",
    "Mixed human-AI writing cannot be accurately detected",
    "Results may vary across languages and domains",
];

const PASS_MARK: &str = "✅";
const FAIL_MARK: &str = "❌";
const BAR_WIDTH: usize = 40;

pub fn limitations() -> Vec<String> {
    LIMITATIONS.iter().map(|s| s.to_string()).collect()
}

pub fn build_report(
    request_id: String,
    model: &str,
    ai_probability: f64,
    estimate: &ConfidenceEstimate,
    latency_ms: i64,
) -> AnalysisReport {
    let human_probability = 1.0 - ai_probability;

    let indicators = estimate
        .indicators
        .iter()
        .map(|i| IndicatorLine {
            name: i.name.clone(),
            triggered: i.triggered,
            mark: if i.triggered { PASS_MARK } else { FAIL_MARK }.to_string(),
        })
        .collect();

    AnalysisReport {
        request_id,
        model: model.to_string(),
        ai_probability,
        human_probability,
        ai_percent: format_percent(ai_probability),
        human_percent: format_percent(human_probability),
        tier: estimate.tier,
        confidence_label: format!("{} {}", estimate.tier.marker(), estimate.tier.label()),
        word_count: estimate.word_count,
        margin: estimate.margin,
        margin_display: format!("{:.3}", estimate.margin),
        indicators,
        chart: vec![
            ChartBar { label: "AI".to_string(), value: ai_probability },
            ChartBar { label: "Human".to_string(), value: human_probability },
        ],
        limitations: limitations(),
        note: RESULT_NOTE.to_string(),
        latency_ms,
    }
}

fn bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

/// Plain-text rendering for the terminal.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Detection Result");
    let _ = writeln!(out, "  AI Probability:    {}", report.ai_percent);
    let _ = writeln!(out, "  Human Probability: {}", report.human_percent);
    let _ = writeln!(out);

    let _ = writeln!(out, "Model Uncertainty");
    let _ = writeln!(out, "  Confidence Level: {}", report.confidence_label);
    let _ = writeln!(out, "  Word count: {}", report.word_count);
    let _ = writeln!(out, "  Prediction margin: {}", report.margin_display);
    let _ = writeln!(out, "  Uncertainty Indicators:");
    for line in &report.indicators {
        let _ = writeln!(out, "    {} {}", line.mark, line.name);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Probability Visualization");
    for b in &report.chart {
        let _ = writeln!(out, "  {:<6} {} {:>7}", b.label, bar(b.value), format_percent(b.value));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.note);
    let _ = writeln!(out);

    let _ = writeln!(out, "System Limitations");
    for item in &report.limitations {
        let _ = writeln!(out, "  • {}", item);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::confidence::estimate_confidence;
    use crate::models::ConfidenceTier;

    fn sample(ai: f64, words: usize) -> AnalysisReport {
        let text = vec!["w"; words].join(" ");
        let est = estimate_confidence(&text, ai);
        build_report("req-1".to_string(), "test/model", ai, &est, 12)
    }

    #[test]
    fn test_probabilities_are_complementary() {
        for p in [0.0, 0.1, 0.33, 0.5, 0.62, 0.999, 1.0] {
            let r = sample(p, 10);
            assert_eq!(r.ai_probability + r.human_probability, 1.0);
            assert_eq!(r.chart[0].value, p);
            assert_eq!(r.chart[1].value, r.human_probability);
        }
    }

    #[test]
    fn test_report_formatting() {
        let r = sample(0.95, 250);
        assert_eq!(r.ai_percent, "95.00%");
        assert_eq!(r.human_percent, "5.00%");
        assert_eq!(r.margin_display, "0.450");
        assert_eq!(r.tier, ConfidenceTier::High);
        assert_eq!(r.confidence_label, "🟢 High Confidence");
        assert!(r.indicators.iter().all(|i| i.mark == FAIL_MARK));
        assert_eq!(r.limitations.len(), 4);
        assert_eq!(r.chart.iter().map(|b| b.label.as_str()).collect::<Vec<_>>(), vec!["AI", "Human"]);
    }

    #[test]
    fn test_render_text_contains_sections() {
        let text = render_text(&sample(0.5, 50));
        assert!(text.contains("AI Probability:    50.00%"));
        assert!(text.contains("🔴 Low Confidence"));
        assert!(text.contains("Prediction margin: 0.000"));
        assert!(text.contains("✅ Prediction near 50%"));
        assert!(text.contains("Mixed human-AI writing cannot be accurately detected"));
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1.0).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(bar(0.5).chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
    }
}
