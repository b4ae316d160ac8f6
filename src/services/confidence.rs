// Confidence Estimation
// Heuristic tiering over text length and prediction margin

use crate::models::{ConfidenceEstimate, ConfidenceIndicator, ConfidenceTier};
use super::text_processor::count_words;

pub const SHORT_TEXT_INDICATOR: &str = "Short text length (<100 words)";
pub const NEAR_HALF_INDICATOR: &str = "Prediction near 50%";
pub const LOW_MARGIN_INDICATOR: &str = "Low prediction margin";

const SHORT_TEXT_WORDS: usize = 100;
const MEDIUM_TEXT_WORDS: usize = 200;
const NEAR_HALF_MARGIN: f64 = 0.1;
const LOW_MARGIN: f64 = 0.15;
const MEDIUM_MARGIN: f64 = 0.2;
/// Margins are snapped to this grid so 0.5+d and 0.5-d land on the same value.
const MARGIN_SCALE: f64 = 1e9;

/// Distance of the AI probability from 0.5.
pub fn prediction_margin(ai_probability: f64) -> f64 {
    ((ai_probability - 0.5).abs() * MARGIN_SCALE).round() / MARGIN_SCALE
}

/// Tier decision, first match wins.
/// The 0.15 low-margin indicator is informational only.
pub fn decide_tier(word_count: usize, margin: f64) -> ConfidenceTier {
    if word_count < SHORT_TEXT_WORDS || margin < NEAR_HALF_MARGIN {
        ConfidenceTier::Low
    } else if word_count < MEDIUM_TEXT_WORDS || margin < MEDIUM_MARGIN {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::High
    }
}

pub fn estimate_confidence(text: &str, ai_probability: f64) -> ConfidenceEstimate {
    let word_count = count_words(text);
    let margin = prediction_margin(ai_probability);

    let indicators = vec![
        ConfidenceIndicator {
            name: SHORT_TEXT_INDICATOR.to_string(),
            triggered: word_count < SHORT_TEXT_WORDS,
        },
        ConfidenceIndicator {
            name: NEAR_HALF_INDICATOR.to_string(),
            triggered: margin < NEAR_HALF_MARGIN,
        },
        ConfidenceIndicator {
            name: LOW_MARGIN_INDICATOR.to_string(),
            triggered: margin < LOW_MARGIN,
        },
    ];

    ConfidenceEstimate {
        tier: decide_tier(word_count, margin),
        indicators,
        word_count,
        margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_short_text_at_half_is_low() {
        let est = estimate_confidence(&words(50), 0.5);
        assert_eq!(est.word_count, 50);
        assert_eq!(est.margin, 0.0);
        assert_eq!(est.tier, ConfidenceTier::Low);
        assert_eq!(est.indicator(SHORT_TEXT_INDICATOR), Some(true));
        assert_eq!(est.indicator(NEAR_HALF_INDICATOR), Some(true));
        assert_eq!(est.indicator(LOW_MARGIN_INDICATOR), Some(true));
    }

    #[test]
    fn test_long_confident_text_is_high() {
        let est = estimate_confidence(&words(250), 0.95);
        assert_eq!(est.word_count, 250);
        assert!((est.margin - 0.45).abs() < 1e-9);
        assert_eq!(est.tier, ConfidenceTier::High);
        assert!(est.indicators.iter().all(|i| !i.triggered));
    }

    #[test]
    fn test_mid_length_moderate_margin_is_medium() {
        let est = estimate_confidence(&words(150), 0.62);
        assert!((est.margin - 0.12).abs() < 1e-9);
        assert_eq!(est.tier, ConfidenceTier::Medium);
        assert_eq!(est.indicator(SHORT_TEXT_INDICATOR), Some(false));
        assert_eq!(est.indicator(NEAR_HALF_INDICATOR), Some(false));
        assert_eq!(est.indicator(LOW_MARGIN_INDICATOR), Some(true));
    }

    #[test]
    fn test_short_text_is_always_low() {
        for p in [0.0, 0.05, 0.3, 0.5, 0.77, 1.0] {
            assert_eq!(estimate_confidence(&words(99), p).tier, ConfidenceTier::Low);
        }
    }

    #[test]
    fn test_long_text_with_wide_margin_is_high() {
        for p in [0.0, 0.1, 0.25, 0.75, 0.9, 1.0] {
            assert_eq!(estimate_confidence(&words(200), p).tier, ConfidenceTier::High);
        }
    }

    #[test]
    fn test_margin_is_symmetric() {
        let text = words(180);
        for d in [0.0, 0.05, 0.125, 0.25, 0.5] {
            let above = estimate_confidence(&text, 0.5 + d);
            let below = estimate_confidence(&text, 0.5 - d);
            assert!((above.margin - below.margin).abs() < 1e-12);
            assert_eq!(above.tier, below.tier);
        }
    }

    #[test]
    fn test_margin_is_symmetric_at_thresholds() {
        let text = words(250);
        for d in [0.1, 0.15, 0.2] {
            let above = estimate_confidence(&text, 0.5 + d);
            let below = estimate_confidence(&text, 0.5 - d);
            assert_eq!(above.margin, below.margin);
            assert_eq!(above.tier, below.tier);
            assert_eq!(above.indicators, below.indicators);
        }
        assert_eq!(estimate_confidence(&text, 0.7).tier, ConfidenceTier::High);
        assert_eq!(estimate_confidence(&text, 0.3).tier, ConfidenceTier::High);
        assert_eq!(estimate_confidence(&text, 0.6).tier, ConfidenceTier::Medium);
        assert_eq!(estimate_confidence(&text, 0.4).tier, ConfidenceTier::Medium);
    }

    #[test]
    fn test_prediction_margin_hits_thresholds_exactly() {
        assert_eq!(prediction_margin(0.6), 0.1);
        assert_eq!(prediction_margin(0.4), 0.1);
        assert_eq!(prediction_margin(0.65), 0.15);
        assert_eq!(prediction_margin(0.35), 0.15);
        assert_eq!(prediction_margin(0.7), 0.2);
        assert_eq!(prediction_margin(0.3), 0.2);
    }

    #[test]
    fn test_word_count_boundaries() {
        assert_eq!(decide_tier(99, 0.45), ConfidenceTier::Low);
        assert_eq!(decide_tier(100, 0.45), ConfidenceTier::Medium);
        assert_eq!(decide_tier(199, 0.45), ConfidenceTier::Medium);
        assert_eq!(decide_tier(200, 0.45), ConfidenceTier::High);

        let at_hundred = estimate_confidence(&words(100), 0.95);
        assert_eq!(at_hundred.tier, ConfidenceTier::Medium);
        assert_eq!(at_hundred.indicator(SHORT_TEXT_INDICATOR), Some(false));
        let below_hundred = estimate_confidence(&words(99), 0.95);
        assert_eq!(below_hundred.indicator(SHORT_TEXT_INDICATOR), Some(true));
    }

    #[test]
    fn test_margin_boundaries() {
        assert_eq!(decide_tier(250, 0.099), ConfidenceTier::Low);
        assert_eq!(decide_tier(250, 0.1), ConfidenceTier::Medium);
        assert_eq!(decide_tier(250, 0.199), ConfidenceTier::Medium);
        assert_eq!(decide_tier(250, 0.2), ConfidenceTier::High);

        let text = words(250);
        let near = estimate_confidence(&text, 0.59);
        assert_eq!(near.indicator(NEAR_HALF_INDICATOR), Some(true));
        let at_tenth = estimate_confidence(&text, 0.6);
        assert_eq!(at_tenth.indicator(NEAR_HALF_INDICATOR), Some(false));
        assert_eq!(at_tenth.indicator(LOW_MARGIN_INDICATOR), Some(true));

        let under_low = estimate_confidence(&text, 0.64);
        assert_eq!(under_low.indicator(LOW_MARGIN_INDICATOR), Some(true));
        let at_low = estimate_confidence(&text, 0.65);
        assert_eq!(at_low.indicator(LOW_MARGIN_INDICATOR), Some(false));
        assert_eq!(at_low.tier, ConfidenceTier::Medium);
    }

    #[test]
    fn test_low_margin_indicator_is_not_used_for_tier() {
        // margin 0.17: indicator is off, tier still Medium because of the 0.2 cut
        let est = estimate_confidence(&words(300), 0.67);
        assert_eq!(est.indicator(LOW_MARGIN_INDICATOR), Some(false));
        assert_eq!(est.tier, ConfidenceTier::Medium);
    }

    #[test]
    fn test_indicator_order_is_fixed() {
        let est = estimate_confidence("one two", 0.9);
        let names: Vec<&str> = est.indicators.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec![SHORT_TEXT_INDICATOR, NEAR_HALF_INDICATOR, LOW_MARGIN_INDICATOR]);
    }
}
