use crate::lexicon::{Lexicon, LexiconLookup};
use crate::rules::{self, RuleContext};
use crate::tag::Tag;
use crate::token::{TaggedToken, Token};
use crate::tokenizer::tokenize;

/// Rule-cascade part-of-speech tagger over an injected lexicon.
///
/// Tagging is a pure function of the input and the lexicon, so one tagger
/// can be shared across threads (wrap the lexicon in an `Arc` or borrow it).
#[derive(Debug, Clone, Default)]
pub struct Tagger<L = Lexicon> {
    lexicon: L,
}

impl<L: LexiconLookup> Tagger<L> {
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn into_lexicon(self) -> L {
        self.lexicon
    }

    /// Tokenize `text` and tag every token, in input order.
    pub fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let tokens = tokenize(text);
        let _span = tracing::debug_span!("tag", tokens = tokens.len()).entered();
        self.tag_sequence(tokens)
    }

    /// Tag tokens that were split by the caller.
    ///
    /// The built-in tokenizer drops `$`, `,` and `%`, so money and
    /// percentage shapes only reach the cascade through this entry point.
    /// Start offsets are left at 0.
    pub fn tag_tokens<I, S>(&self, words: I) -> Vec<TaggedToken>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| Token::new(word, index, 0))
            .collect();
        self.tag_sequence(tokens)
    }

    /// Resolve one token given the finalized token before it.
    pub fn tag_token(&self, token: &Token, previous: Option<&TaggedToken>) -> Tag {
        let key = token.lookup_key();
        let lower_key = key.to_lowercase();
        let ctx = RuleContext {
            surface: &token.text,
            key,
            lower_key: &lower_key,
            previous,
            lexicon: &self.lexicon,
        };
        rules::run_cascade(&ctx)
    }

    fn tag_sequence(&self, tokens: Vec<Token>) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let tag = self.tag_token(&token, tagged.last());
            tagged.push(TaggedToken::new(token, tag));
        }
        tracing::debug!(tagged = tagged.len(), "tagging complete");
        tagged
    }
}
