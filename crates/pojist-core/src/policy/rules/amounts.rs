//! Amount and coverage-limit normalization.

/// Remove digit grouping from a captured amount ("12 500" -> "12500").
///
/// Returns `None` when nothing but whitespace was captured.
pub fn strip_grouping(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Join two liability sublimits (health / property) as `A/B`.
pub fn limit_pair(first: &str, second: &str) -> String {
    format!("{}/{}", first.trim(), second.trim())
}
