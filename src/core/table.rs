// File: src/core/table.rs

/// Character-level Arabic to Latin substitutions.
///
/// Covers the Arabic alphabet only. Digits, punctuation and anything
/// outside the alphabet have no entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransliterationTable;

impl TransliterationTable {
    pub fn new() -> Self {
        Self
    }

    #[rustfmt::skip]
    pub fn get(&self, c: char) -> Option<&'static str> {
        match c {
            'ا' => Some("a"), 'ب' => Some("b"), 'ت' => Some("t"),
            'ث' => Some("th"), 'ج' => Some("j"), 'ح' => Some("h"),
            'خ' => Some("kh"), 'د' => Some("d"), 'ذ' => Some("th"),
            'ر' => Some("r"), 'ز' => Some("z"), 'س' => Some("s"),
            'ش' => Some("sh"), 'ص' => Some("s"), 'ض' => Some("d"),
            'ط' => Some("t"), 'ظ' => Some("z"), 'ع' => Some("a"),
            'غ' => Some("gh"), 'ف' => Some("f"), 'ق' => Some("q"),
            'ك' => Some("k"), 'ل' => Some("l"), 'م' => Some("m"),
            'ن' => Some("n"), 'ه' => Some("h"), 'و' => Some("w"),
            'ي' => Some("y"), 'ى' => Some("a"), 'ء' => Some("a"),
            _ => None,
        }
    }
}
