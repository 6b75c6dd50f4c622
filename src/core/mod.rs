// src/core/mod.rs

pub mod converter;
pub mod detect;
pub mod dictionary;
pub mod engine;
pub mod names;
pub mod normalizer;
pub mod table;
pub mod types;
