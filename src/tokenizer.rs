//! Splits raw text into word-like tokens.
//!
//! A token is a maximal run of ASCII letters, digits, underscores, periods
//! and apostrophes. Everything else separates tokens and is dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::token::Token;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_.']+").unwrap());

/// Tokenize `text` left to right. Any string is valid input.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .find_iter(text)
        .enumerate()
        .map(|(index, m)| Token::new(m.as_str(), index, m.start()))
        .collect()
}
