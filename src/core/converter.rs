// File: src/core/converter.rs
use crate::core::normalizer::is_space;
use crate::core::table::TransliterationTable;

/// Letter-by-letter Arabic to Latin converter, used when a token has no
/// curated dictionary entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransliterationEngine {
    table: TransliterationTable,
}

impl TransliterationEngine {
    pub fn new() -> Self {
        Self { table: TransliterationTable::new() }
    }

    /// Transliterates one already-normalized token.
    ///
    /// Unmapped characters are carried through the substitution and then
    /// dropped along with anything else that is not an ASCII letter or
    /// whitespace. The result is capitalized as a single word.
    pub fn transliterate(&self, token: &str) -> String {
        let mut substituted = String::with_capacity(token.len() * 2);
        for c in token.chars() {
            match self.table.get(c) {
                Some(latin) => substituted.push_str(latin),
                None => substituted.push(c),
            }
        }

        let kept: String = substituted
            .chars()
            .filter(|&c| c.is_ascii_alphabetic() || is_space(c))
            .collect();

        capitalize(kept.trim_matches(is_space))
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_is_spelled_out() {
        let engine = TransliterationEngine::new();
        assert_eq!(engine.transliterate("زيد"), "Zyd");
        assert_eq!(engine.transliterate("زيد"), engine.transliterate("زيد"));
    }

    #[test]
    fn digraphs_come_through() {
        let engine = TransliterationEngine::new();
        assert_eq!(engine.transliterate("شخص"), "Shkhs");
        assert_eq!(engine.transliterate("غيث"), "Ghyth");
    }

    #[test]
    fn latin_input_is_recased() {
        let engine = TransliterationEngine::new();
        assert_eq!(engine.transliterate("jOHN"), "John");
    }

    #[test]
    fn digits_and_punctuation_are_dropped() {
        let engine = TransliterationEngine::new();
        assert_eq!(engine.transliterate("بدر-2"), "Bdr");
        assert_eq!(engine.transliterate("٣٤"), "");
        assert_eq!(engine.transliterate("ئ"), "");
        assert_eq!(engine.transliterate(""), "");
    }
}
