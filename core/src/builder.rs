use crate::index::Index;
use crate::loader::{load_document, load_text};
use crate::merge::merge_keywords;
use crate::tokenizer::NoiseWords;

/// Builds an [`Index`] one document at a time, in the order documents are added.
pub struct IndexBuilder {
    index: Index,
}

impl IndexBuilder {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self { index: Index::with_noise_words(noise_words) }
    }

    /// Load and merge a document given as raw tokens.
    pub fn add_document<I, S>(&mut self, document: &str, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = load_document(document, tokens, &self.index.noise_words);
        merge_keywords(&mut self.index.keywords, keywords);
        self.index.documents.push(document.to_string());
        self
    }

    /// Load and merge a document given as raw text.
    pub fn add_text(&mut self, document: &str, text: &str) -> &mut Self {
        let keywords = load_text(document, text, &self.index.noise_words);
        merge_keywords(&mut self.index.keywords, keywords);
        self.index.documents.push(document.to_string());
        self
    }

    pub fn finish(self) -> Index {
        tracing::info!(
            num_docs = self.index.document_count(),
            num_keywords = self.index.keyword_count(),
            "index build complete"
        );
        self.index
    }
}

/// Build an index from `(document, tokens)` pairs processed in the given order.
pub fn build<D, T, S>(documents: D, noise_words: NoiseWords) -> Index
where
    D: IntoIterator<Item = (String, T)>,
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = IndexBuilder::new(noise_words);
    for (document, tokens) in documents {
        builder.add_document(&document, tokens);
    }
    builder.finish()
}
