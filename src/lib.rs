pub mod error;
pub mod tag;
pub mod token;
pub mod tokenizer;
pub mod lexicon;
pub mod shape;
pub mod rules;
pub mod tagger;

pub use error::{LexiconError, ParseTagError};
pub use lexicon::{Lexicon, LexiconFormat, LexiconLookup, LoadOptions};
pub use tag::Tag;
pub use tagger::Tagger;
pub use token::{TaggedToken, Token};
pub use tokenizer::tokenize;
