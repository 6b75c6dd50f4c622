// File: src/core/detect.rs

/// True when any character falls in the core Arabic block (U+0600..=U+06FF).
///
/// Works on the raw text; no normalization is applied first.
pub fn is_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}
