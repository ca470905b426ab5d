use std::collections::HashMap;

use crate::index::{Index, Occurrence};

/// Upper bound on documents returned by [`Index::top_matches`].
pub const MAX_RESULTS: usize = 5;

impl Index {
    /// Every document containing `kw1` or `kw2`, with frequencies summed per
    /// document, in descending order of combined frequency.
    ///
    /// Equal totals keep first-seen order: `kw1`'s list is scanned before
    /// `kw2`'s, each in its stored order.
    pub fn combined_matches(&self, kw1: &str, kw2: &str) -> Vec<Occurrence> {
        let mut combined: Vec<Occurrence> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        let first = self.occurrences(kw1).unwrap_or_default();
        let second = self.occurrences(kw2).unwrap_or_default();
        for occ in first.iter().chain(second) {
            match positions.get(occ.document.as_str()) {
                Some(&pos) => combined[pos].frequency += occ.frequency,
                None => {
                    positions.insert(&occ.document, combined.len());
                    combined.push(occ.clone());
                }
            }
        }
        // stable
        combined.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        combined
    }

    /// Up to [`MAX_RESULTS`] documents for the query "`kw1` or `kw2`",
    /// most relevant first. Keywords are looked up verbatim.
    pub fn top_matches(&self, kw1: &str, kw2: &str) -> Vec<String> {
        self.combined_matches(kw1, kw2)
            .into_iter()
            .take(MAX_RESULTS)
            .map(|occ| occ.document)
            .collect()
    }

    /// Normalize two raw query words, then answer [`Index::top_matches`].
    /// A word that is not a keyword matches nothing.
    pub fn search(&self, word1: &str, word2: &str) -> Vec<String> {
        let kw1 = self.query_keyword(word1);
        let kw2 = self.query_keyword(word2);
        self.top_matches(kw1.as_deref().unwrap_or_default(), kw2.as_deref().unwrap_or_default())
    }

    /// Query-side normalization; rejected words are logged and map to `None`.
    pub fn query_keyword(&self, word: &str) -> Option<String> {
        let keyword = self.normalize(word);
        if keyword.is_none() && !word.is_empty() {
            tracing::warn!(word, "query word is not a keyword");
        }
        keyword
    }
}
