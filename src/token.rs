use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// A word-like slice of the input, in sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// 0-based position in the token sequence.
    pub index: usize,
    /// Byte offset of the token in the input text.
    pub start: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, index: usize, start: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
        }
    }

    /// Byte offset one past the end of the token in the input text.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// The surface form with every trailing period removed.
    ///
    /// `"sat."` and `"etc..."` look up as `"sat"` and `"etc"`. A token made
    /// only of periods yields the empty string.
    pub fn lookup_key(&self) -> &str {
        self.text.trim_end_matches('.')
    }
}

/// A token paired with its finalized tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: Tag,
}

impl TaggedToken {
    pub fn new(token: Token, tag: Tag) -> Self {
        Self { token, tag }
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }

    pub fn as_pair(&self) -> (&str, Tag) {
        (self.text(), self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_key_strips_all_trailing_periods() {
        assert_eq!(Token::new("sat.", 0, 0).lookup_key(), "sat");
        assert_eq!(Token::new("etc...", 0, 0).lookup_key(), "etc");
        assert_eq!(Token::new("U.S.", 0, 0).lookup_key(), "U.S");
        assert_eq!(Token::new("cat", 0, 0).lookup_key(), "cat");
        assert_eq!(Token::new("...", 0, 0).lookup_key(), "");
    }

    #[test]
    fn test_end_offset() {
        let token = Token::new("cat", 1, 4);
        assert_eq!(token.end(), 7);
    }

    #[test]
    fn test_tagged_token_serializes_tag_code() {
        let tagged = TaggedToken::new(Token::new("ran", 0, 0), Tag::VBD);
        let json = serde_json::to_value(&tagged).unwrap();
        assert_eq!(json["token"]["text"], "ran");
        assert_eq!(json["tag"], "VBD");
        assert_eq!(tagged.as_pair(), ("ran", Tag::VBD));
    }
}
