// src/generators/mod.rs
pub mod password;

pub use password::{
    CharSetRule, PasswordGenerator, PasswordGeneratorBuilder, PolicyError, CHARS_DIGITS,
    CHARS_LOWER, CHARS_SYMBOLS, CHARS_UPPER,
};
