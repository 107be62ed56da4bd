// src/utils/format.rs
use lazy_static::lazy_static;
use regex::Regex;

const IDENTIFIER_PATTERN: &str = "[a-zA-Z]([a-zA-Z0-9_]*[a-zA-Z0-9])*";
const SNAKE_PATTERN: &str = "[a-z]([a-z0-9_]*[a-z0-9])*";

// Compiled on first use
lazy_static! {
    static ref IDENTIFIER_REGEX: Regex = anchored(IDENTIFIER_PATTERN);
    static ref SNAKE_REGEX: Regex = anchored(SNAKE_PATTERN);
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^{}$", pattern)).expect("built-in format pattern must compile")
}

/// True if `s` starts with a letter, ends with a letter or digit and
/// otherwise contains only letters, digits and underscores.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_REGEX.is_match(s)
}

/// Like [`is_identifier`] but lowercase only.
pub fn is_snake(s: &str) -> bool {
    SNAKE_REGEX.is_match(s)
}
