use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use search_core::source::{build_from_files, build_from_paths, read_noise_words};
use search_core::{Index, Occurrence, MAX_RESULTS};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index a set of text documents and answer two-keyword queries", long_about = None)]
struct Cli {
    #[command(flatten)]
    corpus: CorpusArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct CorpusArgs {
    /// File listing the documents to index
    #[arg(long, default_value = "docs.txt")]
    docs: PathBuf,
    /// Index every .txt file under this directory instead of --docs
    #[arg(long)]
    dir: Option<PathBuf>,
    /// File of noise words excluded from indexing
    #[arg(long, default_value = "noisewords.txt")]
    noise: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Top documents containing either keyword
    Search {
        kw1: String,
        kw2: String,
        /// Print hits with combined frequencies as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Occurrence list of one keyword
    Keyword { keyword: String },
    /// Document and keyword counts
    Stats,
    /// Read "kw1 kw2" queries from stdin until "exit"
    Repl,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kw1: &'a str,
    kw2: &'a str,
    total_hits: usize,
    results: Vec<Occurrence>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let index = load_index(&cli.corpus)?;

    match cli.command {
        Some(Commands::Search { kw1, kw2, json }) => search(&index, &kw1, &kw2, json),
        Some(Commands::Keyword { keyword }) => show_keyword(&index, &keyword),
        Some(Commands::Stats) => {
            println!("documents: {}", index.document_count());
            println!("keywords: {}", index.keyword_count());
            println!("noise words: {}", index.noise_words().len());
            Ok(())
        }
        Some(Commands::Repl) => repl(&index),
        None => search(&index, "deep", "world", false),
    }
}

fn load_index(corpus: &CorpusArgs) -> Result<Index> {
    match &corpus.dir {
        Some(dir) => {
            let documents = collect_text_files(dir)?;
            build_from_paths(&documents, read_noise_words(&corpus.noise)?)
        }
        None => build_from_files(&corpus.docs, &corpus.noise),
    }
}

fn collect_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();
    files.sort();
    tracing::debug!(dir = %dir.display(), num_files = files.len(), "collected documents");
    Ok(files)
}

fn search(index: &Index, word1: &str, word2: &str, json: bool) -> Result<()> {
    let kw1 = index.query_keyword(word1).unwrap_or_default();
    let kw2 = index.query_keyword(word2).unwrap_or_default();
    let combined = index.combined_matches(&kw1, &kw2);

    if json {
        let out = SearchOutput {
            kw1: &kw1,
            kw2: &kw2,
            total_hits: combined.len(),
            results: combined.into_iter().take(MAX_RESULTS).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if combined.is_empty() {
        println!("no matches for \"{word1}\" or \"{word2}\"");
    }
    for occ in combined.iter().take(MAX_RESULTS) {
        println!("{}", occ.document);
    }
    Ok(())
}

fn show_keyword(index: &Index, word: &str) -> Result<()> {
    let Some(keyword) = index.query_keyword(word) else {
        bail!("\"{word}\" is not a keyword");
    };
    match index.occurrences(&keyword) {
        Some(occurrences) => {
            for occ in occurrences {
                println!("{}\t{}", occ.frequency, occ.document);
            }
        }
        None => println!("\"{keyword}\" does not occur in any document"),
    }
    Ok(())
}

fn repl(index: &Index) -> Result<()> {
    println!("Enter two keywords (or \"exit\"):");
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == "exit" {
            break;
        }
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some(kw1), kw2) => search(index, kw1, kw2.unwrap_or_default(), false)?,
            (None, _) => continue,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_only_text_files_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("notes.md"), "md").unwrap();
        fs::write(dir.path().join("sub/c.txt"), "c").unwrap();

        let files = collect_text_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(names, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt"), PathBuf::from("sub/c.txt")]);
    }

    #[test]
    fn indexes_a_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("d1.txt"), "deep deep world").unwrap();
        fs::write(dir.path().join("d2.txt"), "hello world world world").unwrap();
        let noise = dir.path().join("noise.list");
        fs::write(&noise, "hello\n").unwrap();

        let corpus = CorpusArgs { docs: PathBuf::from("unused"), dir: Some(dir.path().to_path_buf()), noise };
        let index = load_index(&corpus).unwrap();
        assert_eq!(index.document_count(), 2);
        assert_eq!(index.occurrences("hello"), None);
        let top = index.top_matches("deep", "world");
        assert!(top[0].ends_with("d1.txt"));
        assert!(top[1].ends_with("d2.txt"));
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = tempdir().unwrap();
        assert!(collect_text_files(&dir.path().join("missing")).is_err());
    }
}
