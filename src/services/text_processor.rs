// Text Processing Service
// Input checks and word counting shared by the analyzer and the views

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True when the text has nothing left after trimming whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Single-line preview for logs, cut at `max_chars` characters.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace(['\n', '\r'], " ")
}

/// Format a probability in [0,1] as a percentage with two decimals.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}
