use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::IndexBuilder;
use crate::index::Index;
use crate::tokenizer::NoiseWords;

/// Whitespace-delimited words of a file.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Stoplist file, one or more words per line. Entries are kept as written.
pub fn read_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords> {
    Ok(read_words(path)?.into_iter().collect())
}

/// File listing document paths to index, in order.
pub fn read_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    Ok(read_words(path)?.into_iter().map(PathBuf::from).collect())
}

/// Index each document file in order. The document identifier is the path as given.
/// Any unreadable document aborts the whole build.
pub fn build_from_paths<P: AsRef<Path>>(documents: &[P], noise_words: NoiseWords) -> Result<Index> {
    let mut builder = IndexBuilder::new(noise_words);
    for document in documents {
        let document = document.as_ref();
        let text = fs::read_to_string(document)
            .with_context(|| format!("document not found: {}", document.display()))?;
        builder.add_text(&document.to_string_lossy(), &text);
    }
    Ok(builder.finish())
}

/// Read the document list and stoplist, then index every listed document.
pub fn build_from_files<P: AsRef<Path>, Q: AsRef<Path>>(docs_file: P, noise_words_file: Q) -> Result<Index> {
    let noise_words = read_noise_words(noise_words_file)?;
    let documents = read_document_list(docs_file)?;
    tracing::info!(num_docs = documents.len(), num_noise_words = noise_words.len(), "indexing documents");
    build_from_paths(&documents, noise_words)
}
