// File: src/core/normalizer.rs

const TATWEEL: char = '\u{0640}';
const SUPERSCRIPT_ALEF: char = '\u{0670}';
const BARE_ALEF: char = 'ا';
const TAA_MARBUTA: char = 'ة';
const HAA: char = 'ه';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whitespace for trimming and splitting names. Includes the byte order
/// mark, which pasted text often starts with.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Tashkil marks, fathatan (U+064B) through sukun (U+0652).
fn is_tashkil(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c)
}

fn is_stripped(c: char) -> bool {
    is_tashkil(c) || c == SUPERSCRIPT_ALEF || c == TATWEEL
}

/// Folds a single letter variant onto its base letter.
fn fold(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' => BARE_ALEF,
        TAA_MARBUTA => HAA,
        other => other,
    }
}

/// Normalizes Arabic text before any lookup.
///
/// Strips diacritics and tatweel, folds alef variants to bare alef and
/// taa marbuta to haa, then trims surrounding whitespace. Interior
/// whitespace is left as is so compound names keep their shape.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let folded: String = text
        .chars()
        .filter(|&c| !is_stripped(c))
        .map(fold)
        .collect();

    folded.trim_matches(is_space).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn strips_tashkil_and_tatweel() {
        assert_eq!(clean("مُحَمَّد"), "محمد");
        assert_eq!(clean("محـــمد"), "محمد");
        assert_eq!(clean("رحمٰن"), "رحمن");
    }

    #[test]
    fn folds_alef_variants_and_taa_marbuta() {
        assert_eq!(clean("أحمد"), "احمد");
        assert_eq!(clean("إبراهيم"), "ابراهيم");
        assert_eq!(clean("آمنة"), "امنه");
        assert_eq!(clean("فاطمة"), "فاطمه");
    }

    #[test]
    fn trims_but_keeps_interior_spaces() {
        assert_eq!(clean("  محمد   علي \n"), "محمد   علي");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(clean("\u{FEFF}"), "");
        assert_eq!(clean("\u{FEFF}محمد\u{FEFF}"), "محمد");
        assert!(is_space('\u{FEFF}'));
        assert!(!is_space('ا'));
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(clean("Hello 42"), "Hello 42");
    }
}
