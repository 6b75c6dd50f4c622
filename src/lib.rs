// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;

pub use crate::config::{EmptyTokenPolicy, TranslatorConfig};
pub use crate::core::engine::NameTranslator;
pub use crate::core::types::NameEntry;
pub use crate::error::TranslitError;

use once_cell::sync::Lazy;

static DEFAULT_TRANSLATOR: Lazy<NameTranslator> = Lazy::new(NameTranslator::new);

/// Latin rendering of an Arabic name. `None` is treated as empty input.
pub fn translate<'a>(name: impl Into<Option<&'a str>>) -> String {
    DEFAULT_TRANSLATOR.translate(name.into().unwrap_or_default())
}

/// Whether the text contains any Arabic character. `None` is never Arabic.
pub fn is_arabic<'a>(text: impl Into<Option<&'a str>>) -> bool {
    DEFAULT_TRANSLATOR.is_arabic(text.into().unwrap_or_default())
}

/// Normalized form of the text used for dictionary matching.
pub fn clean<'a>(text: impl Into<Option<&'a str>>) -> String {
    DEFAULT_TRANSLATOR.clean(text.into().unwrap_or_default())
}

/// Letter-by-letter rendering of one normalized token.
pub fn transliterate<'a>(token: impl Into<Option<&'a str>>) -> String {
    DEFAULT_TRANSLATOR.transliterate(token.into().unwrap_or_default())
}
