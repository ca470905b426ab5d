use std::collections::HashMap;

use crate::index::Occurrence;
use crate::tokenizer::{normalize, raw_tokens, NoiseWords};

/// Keyword occurrences of a single document, keyed by keyword.
pub type DocumentKeywords = HashMap<String, Occurrence>;

/// Count every keyword among `tokens`, attributing each count to `document`.
/// Tokens that do not normalize to a keyword are skipped.
pub fn load_document<I, S>(document: &str, tokens: I, noise_words: &NoiseWords) -> DocumentKeywords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords = DocumentKeywords::new();
    for token in tokens {
        let Some(keyword) = normalize(token.as_ref(), noise_words) else { continue };
        keywords
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }
    tracing::debug!(document, keywords = keywords.len(), "loaded document");
    keywords
}

/// Same as [`load_document`] over raw text split on whitespace.
pub fn load_text(document: &str, text: &str, noise_words: &NoiseWords) -> DocumentKeywords {
    load_document(document, raw_tokens(text), noise_words)
}
