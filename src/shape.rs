//! Lexical shape classifiers for numerals, short years and percentages.

use std::sync::LazyLock;

use regex::Regex;

/// Plain digits, comma-grouped thousands, an optional leading `$`, optional
/// decimals and an optional plural or ordinal suffix: `1000`, `1,000`,
/// `$5.99`, `1990s`, `3rd`.
static NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?(?:s|st|nd|rd|th)?$").unwrap()
});

/// `'80s` or `'73`
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'(?P<year>[0-9]{2})(?P<plural>s)?$").unwrap());

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?%$").unwrap());

/// How an abbreviated year matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearShape {
    /// `'73`
    Single,
    /// `'80s`
    Plural,
}

pub fn is_numeral(word: &str) -> bool {
    NUMERAL.is_match(word)
}

pub fn year_shape(word: &str) -> Option<YearShape> {
    let caps = YEAR.captures(word)?;
    if caps.name("plural").is_some() {
        Some(YearShape::Plural)
    } else {
        Some(YearShape::Single)
    }
}

pub fn is_percentage(word: &str) -> bool {
    PERCENTAGE.is_match(word)
}
