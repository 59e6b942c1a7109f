//! The closed part-of-speech tagset.
//!
//! Tags are the Penn Treebank codes used by Brill lexicons, plus the
//! punctuation tags that appear in those lexicons. Every tag the cascade
//! can produce or read is a variant here, so a misspelled code fails to
//! parse instead of silently becoming a new tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTagError;

macro_rules! tagset {
    ($( $(#[$doc:meta])* $variant:ident => $code:literal, )*) => {
        /// Part-of-speech tag (type-safe, not stringly-typed)
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Tag {
            $( $(#[$doc])* #[serde(rename = $code)] $variant, )*
        }

        impl Tag {
            /// Every tag, in declaration order.
            pub const ALL: &'static [Tag] = &[$(Tag::$variant,)*];

            /// The canonical code, e.g. `"NNS"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Tag::$variant => $code,)*
                }
            }
        }

        impl FromStr for Tag {
            type Err = ParseTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Tag::$variant),)*
                    other => Err(ParseTagError(other.to_string())),
                }
            }
        }
    };
}

tagset! {
    /// Coordinating conjunction
    CC => "CC",
    /// Cardinal number
    CD => "CD",
    /// Determiner
    DT => "DT",
    /// Existential "there"
    EX => "EX",
    /// Foreign word
    FW => "FW",
    /// Preposition or subordinating conjunction
    IN => "IN",
    /// Adjective
    JJ => "JJ",
    /// Adjective, comparative
    JJR => "JJR",
    /// Adjective, superlative
    JJS => "JJS",
    /// List item marker
    LS => "LS",
    /// Modal
    MD => "MD",
    /// Noun, singular or mass
    NN => "NN",
    /// Noun, plural
    NNS => "NNS",
    /// Proper noun, singular
    NNP => "NNP",
    /// Proper noun, plural
    NNPS => "NNPS",
    /// Predeterminer
    PDT => "PDT",
    /// Possessive ending
    POS => "POS",
    /// Personal pronoun
    PRP => "PRP",
    /// Possessive pronoun
    PRPS => "PRP$",
    /// Adverb
    RB => "RB",
    /// Adverb, comparative
    RBR => "RBR",
    /// Adverb, superlative
    RBS => "RBS",
    /// Particle
    RP => "RP",
    /// Symbol
    SYM => "SYM",
    /// "to"
    TO => "TO",
    /// Interjection
    UH => "UH",
    /// Verb, base form
    VB => "VB",
    /// Verb, past tense
    VBD => "VBD",
    /// Verb, gerund or present participle
    VBG => "VBG",
    /// Verb, past participle
    VBN => "VBN",
    /// Verb, non-3rd person singular present
    VBP => "VBP",
    /// Verb, 3rd person singular present
    VBZ => "VBZ",
    /// Wh-determiner
    WDT => "WDT",
    /// Wh-pronoun
    WP => "WP",
    /// Possessive wh-pronoun
    WPS => "WP$",
    /// Wh-adverb
    WRB => "WRB",
    Dollar => "$",
    Pound => "#",
    CloseQuote => "''",
    OpenQuote => "``",
    OpenParen => "(",
    CloseParen => ")",
    Comma => ",",
    Period => ".",
    Colon => ":",
}

impl Tag {
    /// Any noun tag: NN, NNS, NNP or NNPS.
    pub fn is_noun(self) -> bool {
        self.as_str().starts_with('N')
    }

    /// Singular or plural common noun (NN or NNS).
    pub fn is_common_noun(self) -> bool {
        matches!(self, Tag::NN | Tag::NNS)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
