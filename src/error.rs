use std::path::PathBuf;

use thiserror::Error;

/// A tag code outside the closed tagset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part-of-speech tag `{0}`")]
pub struct ParseTagError(pub String);

/// Failure while building a [`Lexicon`](crate::Lexicon) from external data.
///
/// Tagging never fails; these errors only come from the loading side.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON lexicon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {source}")]
    UnknownTag {
        line: usize,
        #[source]
        source: ParseTagError,
    },

    #[error("line {line}: entry `{word}` has no tags")]
    MissingTags { line: usize, word: String },
}
