use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Stoplist entries, compared verbatim against normalized words.
pub type NoiseWords = HashSet<String>;

lazy_static! {
    // Only these characters count as punctuation: . , ? : ; ! ' - "
    static ref EDGE_PUNCTUATION: Regex =
        Regex::new(r#"^[.,?:;!'"\-]+|[.,?:;!'"\-]+$"#).expect("valid regex");
    static ref KEYWORD: Regex = Regex::new(r"^\p{L}+$").expect("valid regex");
}

/// Lower-case `word`, strip leading and trailing punctuation runs and require
/// what is left to be purely alphabetic. Does not consult any stoplist.
pub fn strip_punctuation(word: &str) -> Option<String> {
    let lowered = word.to_lowercase();
    let stripped = EDGE_PUNCTUATION.replace_all(&lowered, "");
    if KEYWORD.is_match(&stripped) {
        Some(stripped.into_owned())
    } else {
        None
    }
}

/// Turn a raw whitespace-delimited token into a keyword, or `None` when the
/// token is not one (non-alphabetic body, empty, or a noise word).
pub fn normalize(word: &str, noise_words: &NoiseWords) -> Option<String> {
    strip_punctuation(word).filter(|keyword| !noise_words.contains(keyword))
}

/// Split raw text the way the document scanner does: on any whitespace.
pub fn raw_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
