use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::tag::Tag;

/// Source of candidate tags for a word.
///
/// Callers pass an already-lowercased word. Index 0 of the returned slice
/// is the primary tag; the rest are alternates some rules look for.
pub trait LexiconLookup: Send + Sync {
    fn candidates(&self, word: &str) -> Option<&[Tag]>;

    fn contains(&self, word: &str) -> bool {
        self.candidates(word).is_some()
    }
}

impl<T: LexiconLookup + ?Sized> LexiconLookup for &T {
    fn candidates(&self, word: &str) -> Option<&[Tag]> {
        (**self).candidates(word)
    }
}

impl<T: LexiconLookup + ?Sized> LexiconLookup for Arc<T> {
    fn candidates(&self, word: &str) -> Option<&[Tag]> {
        (**self).candidates(word)
    }
}

impl LexiconLookup for HashMap<String, Vec<Tag>> {
    fn candidates(&self, word: &str) -> Option<&[Tag]> {
        self.get(word).map(Vec::as_slice).filter(|tags| !tags.is_empty())
    }
}

/// On-disk lexicon layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconFormat {
    /// One `word TAG [TAG...]` entry per line, as in Brill's `LEXICON` file.
    #[default]
    Brill,
    /// A JSON object mapping words to arrays of tag codes.
    Json,
}

impl LexiconFormat {
    /// `.json` files are JSON; everything else is read as Brill text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => LexiconFormat::Json,
            _ => LexiconFormat::Brill,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Skip malformed lines with a warning instead of failing the load.
    pub lenient: bool,
}

/// In-memory word to candidate-tags map, keyed by lowercase word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Tag>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, folding the word to lowercase.
    ///
    /// An entry spelled in lowercase replaces whatever is stored for that
    /// key. A capitalised spelling only fills the key if it is still empty,
    /// so `the DT` beats `The NNP` regardless of order. Empty tag lists are
    /// ignored.
    pub fn insert(&mut self, word: &str, tags: Vec<Tag>) {
        if tags.is_empty() {
            return;
        }
        let lower = word.to_lowercase();
        if lower == word {
            self.entries.insert(lower, tags);
            return;
        }
        match self.entries.entry(lower) {
            Entry::Vacant(slot) => {
                slot.insert(tags);
            }
            Entry::Occupied(slot) => {
                tracing::trace!(word, key = slot.key().as_str(), "case variant folded into existing entry");
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&[Tag]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// The primary tag for `word`, if known.
    pub fn primary(&self, word: &str) -> Option<Tag> {
        self.get(word).and_then(|tags| tags.first().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Tag])> {
        self.entries.iter().map(|(word, tags)| (word.as_str(), tags.as_slice()))
    }

    /// Parse Brill's text format: `word TAG [TAG...]` per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse_brill(text: &str) -> Result<Self, LexiconError> {
        Self::parse_brill_with(text, LoadOptions::default())
    }

    pub fn parse_brill_with(text: &str, options: LoadOptions) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::new();
        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_brill_line(line, line_no) {
                Ok((word, tags)) => lexicon.insert(word, tags),
                Err(err) if options.lenient => {
                    tracing::warn!(%err, "skipping lexicon line");
                }
                Err(err) => return Err(err),
            }
        }
        tracing::debug!(entries = lexicon.len(), "parsed brill lexicon");
        Ok(lexicon)
    }

    /// Parse a JSON object of `{"word": ["TAG", ...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let raw: HashMap<String, Vec<Tag>> = serde_json::from_str(json)?;
        let mut lexicon = Lexicon::new();
        // Lowercase spellings first so they always win the folded key.
        let (lower, mixed): (Vec<_>, Vec<_>) = raw
            .into_iter()
            .partition(|(word, _)| word.to_lowercase() == *word);
        for (word, tags) in lower.into_iter().chain(mixed) {
            lexicon.insert(&word, tags);
        }
        tracing::debug!(entries = lexicon.len(), "parsed json lexicon");
        Ok(lexicon)
    }

    /// Read a lexicon file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        Self::load_with(path, LexiconFormat::from_path(path), LoadOptions::default())
    }

    pub fn load_with(
        path: impl AsRef<Path>,
        format: LexiconFormat,
        options: LoadOptions,
    ) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loading lexicon");
        match format {
            LexiconFormat::Brill => Self::parse_brill_with(&text, options),
            LexiconFormat::Json => Self::from_json_str(&text),
        }
    }
}

fn parse_brill_line(line: &str, line_no: usize) -> Result<(&str, Vec<Tag>), LexiconError> {
    let mut fields = line.split_whitespace();
    // Caller has already skipped blank lines.
    let word = fields.next().unwrap_or_default();
    let tags = fields
        .map(|code| {
            code.parse::<Tag>().map_err(|source| LexiconError::UnknownTag {
                line: line_no,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if tags.is_empty() {
        return Err(LexiconError::MissingTags {
            line: line_no,
            word: word.to_string(),
        });
    }
    Ok((word, tags))
}

impl LexiconLookup for Lexicon {
    fn candidates(&self, word: &str) -> Option<&[Tag]> {
        self.get(word)
    }
}

impl<'a> FromIterator<(&'a str, Vec<Tag>)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (&'a str, Vec<Tag>)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for (word, tags) in iter {
            lexicon.insert(word, tags);
        }
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_insert_lowercases_keys() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("Cat", vec![Tag::NN]);
        assert_eq!(lexicon.get("cat"), Some(&[Tag::NN][..]));
        assert_eq!(lexicon.get("Cat"), None);
    }

    #[test]
    fn test_lowercase_spelling_wins_regardless_of_order() {
        let mut a = Lexicon::new();
        a.insert("The", vec![Tag::NNP]);
        a.insert("the", vec![Tag::DT]);

        let mut b = Lexicon::new();
        b.insert("the", vec![Tag::DT]);
        b.insert("The", vec![Tag::NNP]);

        assert_eq!(a.primary("the"), Some(Tag::DT));
        assert_eq!(b.primary("the"), Some(Tag::DT));
    }

    #[test]
    fn test_empty_tag_list_ignored() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("ghost", vec![]);
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("ghost"));
    }

    #[test]
    fn test_parse_brill() {
        let text = "# comment\nrun VB NN VBN\n\nthe DT\nU.S. NNP\n";
        let lexicon = Lexicon::parse_brill(text).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.get("run"), Some(&[Tag::VB, Tag::NN, Tag::VBN][..]));
        assert_eq!(lexicon.primary("u.s."), Some(Tag::NNP));
    }

    #[test]
    fn test_parse_brill_punctuation_tags() {
        let lexicon = Lexicon::parse_brill(", ,\n$ $\nits PRP$\n").unwrap();
        assert_eq!(lexicon.primary(","), Some(Tag::Comma));
        assert_eq!(lexicon.primary("$"), Some(Tag::Dollar));
        assert_eq!(lexicon.primary("its"), Some(Tag::PRPS));
    }

    #[test]
    fn test_parse_brill_unknown_tag() {
        let err = Lexicon::parse_brill("run VB\nwalk XX\n").unwrap_err();
        match err {
            LexiconError::UnknownTag { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source.0, "XX");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_brill_missing_tags() {
        let err = Lexicon::parse_brill("orphan\n").unwrap_err();
        assert!(matches!(err, LexiconError::MissingTags { line: 1, ref word } if word == "orphan"));
    }

    #[test]
    fn test_parse_brill_lenient_skips_bad_lines() {
        let options = LoadOptions { lenient: true };
        let lexicon = Lexicon::parse_brill_with("run VB\nwalk XX\norphan\ncat NN\n", options).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("run"));
        assert!(lexicon.contains("cat"));
    }

    #[test]
    fn test_from_json_str() {
        let lexicon = Lexicon::from_json_str(r#"{"The": ["NNP"], "the": ["DT"], "barks": ["NNS", "VBZ"]}"#).unwrap();
        assert_eq!(lexicon.primary("the"), Some(Tag::DT));
        assert_eq!(lexicon.get("barks"), Some(&[Tag::NNS, Tag::VBZ][..]));
    }

    #[test]
    fn test_from_json_str_rejects_unknown_tag() {
        let err = Lexicon::from_json_str(r#"{"cat": ["KITTY"]}"#).unwrap_err();
        assert!(matches!(err, LexiconError::Json(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(LexiconFormat::from_path(Path::new("lex.json")), LexiconFormat::Json);
        assert_eq!(LexiconFormat::from_path(Path::new("LEX.JSON")), LexiconFormat::Json);
        assert_eq!(LexiconFormat::from_path(Path::new("lexicon.txt")), LexiconFormat::Brill);
        assert_eq!(LexiconFormat::from_path(Path::new("LEXICON")), LexiconFormat::Brill);
    }

    #[test]
    fn test_load_files() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("lexicon.txt");
        let mut file = fs::File::create(&txt).unwrap();
        writeln!(file, "sat VBD").unwrap();
        writeln!(file, "cat NN").unwrap();
        let lexicon = Lexicon::load(&txt).unwrap();
        assert_eq!(lexicon.primary("sat"), Some(Tag::VBD));

        let json = dir.path().join("lexicon.json");
        fs::write(&json, r#"{"sat": ["VBD"]}"#).unwrap();
        let lexicon = Lexicon::load(&json).unwrap();
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = Lexicon::load(&missing).unwrap_err();
        match err {
            LexiconError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_hashmap_lookup_hides_empty_lists() {
        let mut map: HashMap<String, Vec<Tag>> = HashMap::new();
        map.insert("empty".to_string(), vec![]);
        map.insert("cat".to_string(), vec![Tag::NN]);
        assert!(!map.contains("empty"));
        assert_eq!(map.candidates("cat"), Some(&[Tag::NN][..]));
    }

    #[test]
    fn test_from_iterator() {
        let lexicon: Lexicon = [("Run", vec![Tag::VB]), ("cat", vec![Tag::NN])].into_iter().collect();
        assert_eq!(lexicon.primary("run"), Some(Tag::VB));
        assert_eq!(lexicon.iter().count(), 2);
    }
}
