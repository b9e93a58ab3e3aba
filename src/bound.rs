// src/bound.rs
// Output budget enforcement for the delivery transport. Budgets are in
// characters, not bytes: the digest text is not ASCII-only and the
// transport counts characters.

/// Appended whenever the digest had to be cut.
pub const TRUNCATION_MARKER: &str = "\n\n(boletim truncado por limite do Telegram)";

/// Return `text` unchanged when it fits `budget` chars; otherwise cut
/// it to `budget` minus the marker and append the marker, so the result
/// never exceeds the budget and carries the marker iff truncated.
/// Budgets smaller than the marker itself fall back to a plain cut.
pub fn enforce_budget(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let marker_len = TRUNCATION_MARKER.chars().count();
    if budget < marker_len {
        // Budget too small to carry the marker at all; a plain cut of
        // the text beats delivering a marker fragment.
        return text.chars().take(budget).collect();
    }
    let mut out: String = text.chars().take(budget - marker_len).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}
