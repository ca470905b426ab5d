use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tokenizer::{normalize, NoiseWords};

/// Initial capacity of the keyword table; a tuning hint only.
const KEYWORD_CAPACITY: usize = 1000;

/// One keyword's appearance count in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Occurrences of one keyword, unique by document, sorted by descending frequency.
pub type OccurrenceList = Vec<Occurrence>;

#[derive(Debug, Default)]
pub struct Index {
    pub(crate) keywords: HashMap<String, OccurrenceList>,
    pub(crate) noise_words: NoiseWords,
    pub(crate) documents: Vec<String>,
}

impl Index {
    pub fn new() -> Self { Self::with_noise_words(NoiseWords::new()) }

    pub fn with_noise_words(noise_words: NoiseWords) -> Self {
        Self {
            keywords: HashMap::with_capacity(KEYWORD_CAPACITY),
            noise_words,
            documents: Vec::new(),
        }
    }

    /// Occurrence list of `keyword`, looked up verbatim.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    /// Normalize a raw word against this index's stoplist.
    pub fn normalize(&self, word: &str) -> Option<String> {
        normalize(word, &self.noise_words)
    }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise_words }

    /// Document identifiers in the order they were indexed.
    pub fn documents(&self) -> &[String] { &self.documents }

    pub fn document_count(&self) -> usize { self.documents.len() }

    pub fn keyword_count(&self) -> usize { self.keywords.len() }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrence_serializes_as_plain_object() {
        let occ = Occurrence::new("docs/a.txt", 3);
        let json = serde_json::to_value(&occ).unwrap();
        assert_eq!(json, serde_json::json!({ "document": "docs/a.txt", "frequency": 3 }));
    }

    #[test]
    fn empty_index_has_nothing() {
        let index = Index::new();
        assert!(index.is_empty());
        assert_eq!(index.occurrences("anything"), None);
        assert_eq!(index.document_count(), 0);
    }

    #[test]
    fn normalizes_with_own_stoplist() {
        let index = Index::with_noise_words(["of".to_string()].into_iter().collect());
        assert_eq!(index.normalize("Of!"), None);
        assert_eq!(index.normalize("Rust!").as_deref(), Some("rust"));
    }
}
