//! The ordered correction rules applied after the default tag.
//!
//! Each rule is a guarded overwrite: it looks at the token, the finalized
//! previous token and the tag produced so far, and returns either a new tag
//! or the one it was given. [`run_cascade`] folds [`CASCADE`] over
//! [`Tag::NN`]. Order matters; later rules win.

use crate::lexicon::LexiconLookup;
use crate::shape::{self, YearShape};
use crate::tag::Tag;
use crate::token::TaggedToken;

/// Everything a rule may read about the token being tagged.
pub struct RuleContext<'a> {
    /// Surface form exactly as tokenized.
    pub surface: &'a str,
    /// Surface form with trailing periods removed. Shape rules read this.
    pub key: &'a str,
    /// Lowercased `key`, used for lexicon lookups.
    pub lower_key: &'a str,
    /// The previous token, already finalized. `None` for the first token.
    pub previous: Option<&'a TaggedToken>,
    pub lexicon: &'a dyn LexiconLookup,
}

impl RuleContext<'_> {
    fn previous_tag(&self) -> Option<Tag> {
        self.previous.map(|prev| prev.tag)
    }
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&RuleContext<'_>, Tag) -> Tag,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// The rule cascade, in evaluation order.
pub static CASCADE: [Rule; 13] = [
    Rule { name: "dictionary", apply: dictionary },
    Rule { name: "determiner_verb", apply: determiner_verb },
    Rule { name: "noun_with_period", apply: noun_with_period },
    Rule { name: "numeral", apply: numeral },
    Rule { name: "year", apply: year },
    Rule { name: "percentage", apply: percentage },
    Rule { name: "past_participle", apply: past_participle },
    Rule { name: "adverb", apply: adverb },
    Rule { name: "adjective", apply: adjective },
    Rule { name: "would_verb", apply: would_verb },
    Rule { name: "plural", apply: plural },
    Rule { name: "gerund", apply: gerund },
    Rule { name: "noun_noun", apply: noun_noun },
];

/// Resolve a token's tag: start from NN and apply every rule in order.
pub fn run_cascade(ctx: &RuleContext<'_>) -> Tag {
    CASCADE.iter().fold(Tag::NN, |tag, rule| {
        let next = (rule.apply)(ctx, tag);
        if next != tag {
            tracing::trace!(token = ctx.surface, rule = rule.name, from = %tag, to = %next, "rule fired");
        }
        next
    })
}

/// Primary lexicon tag, if the word is known.
pub fn dictionary(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    ctx.lexicon
        .candidates(ctx.lower_key)
        .and_then(|tags| tags.first().copied())
        .unwrap_or(tag)
}

/// "the run": a verb right after a determiner is a noun.
pub fn determiner_verb(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if ctx.previous_tag() == Some(Tag::DT) && matches!(tag, Tag::VBD | Tag::VBP | Tag::VB) {
        Tag::NN
    } else {
        tag
    }
}

pub fn noun_with_period(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if tag.is_noun() && ctx.key.contains('.') {
        Tag::CD
    } else {
        tag
    }
}

/// Numerals, including years and money, are tagged NNS.
pub fn numeral(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if shape::is_numeral(ctx.key) { Tag::NNS } else { tag }
}

pub fn year(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    match shape::year_shape(ctx.key) {
        Some(YearShape::Plural) => Tag::NNS,
        Some(YearShape::Single) => Tag::CD,
        None => tag,
    }
}

pub fn percentage(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if shape::is_percentage(ctx.key) { Tag::NN } else { tag }
}

pub fn past_participle(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if tag.is_noun() && ctx.key.ends_with("ed") {
        Tag::VBN
    } else {
        tag
    }
}

/// Anything ending in "ly", whatever it was tagged before.
pub fn adverb(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if ctx.key.ends_with("ly") { Tag::RB } else { tag }
}

pub fn adjective(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if tag.is_common_noun() && ctx.key.ends_with("al") {
        Tag::JJ
    } else {
        tag
    }
}

/// "would run": a singular noun after "would" is a base verb.
pub fn would_verb(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    let after_would = ctx
        .previous
        .is_some_and(|prev| prev.text().eq_ignore_ascii_case("would"));
    if tag == Tag::NN && after_would { Tag::VB } else { tag }
}

pub fn plural(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if tag == Tag::NN && ctx.key.ends_with('s') {
        Tag::NNS
    } else {
        tag
    }
}

pub fn gerund(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    if tag.is_common_noun() && ctx.key.ends_with("ing") {
        Tag::VBG
    } else {
        tag
    }
}

/// Noun after noun: prefer a verb reading the lexicon allows, VBN before VBZ.
pub fn noun_noun(ctx: &RuleContext<'_>, tag: Tag) -> Tag {
    let after_noun = ctx.previous_tag().is_some_and(Tag::is_common_noun);
    if !tag.is_common_noun() || !after_noun {
        return tag;
    }
    match ctx.lexicon.candidates(ctx.lower_key) {
        Some(tags) if tags.contains(&Tag::VBN) => Tag::VBN,
        Some(tags) if tags.contains(&Tag::VBZ) => Tag::VBZ,
        _ => tag,
    }
}
