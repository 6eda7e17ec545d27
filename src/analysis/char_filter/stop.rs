//! Stop word char filter implementation.
//!
//! Removes whole-word occurrences of stop words from the raw text before
//! tokenization. The word list is compiled once into a single
//! `\b(?:w1|w2|...)\b` alternation, so partial-word matches never fire.
//!
//! # Examples
//!
//! ```
//! use newsvote::analysis::char_filter::CharFilter;
//! use newsvote::analysis::char_filter::stop::StopWordCharFilter;
//!
//! let filter = StopWordCharFilter::from_words(vec!["a", "the"]).unwrap();
//! assert_eq!(filter.filter("a theory of the atom"), " theory of  atom");
//! ```

use std::collections::HashSet;

use regex::Regex;

use super::CharFilter;
use crate::error::{NewsvoteError, Result};

/// Default English stop words list (the NLTK English corpus list).
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A char filter that deletes whole-word stop word occurrences.
///
/// Words keep their list order inside the alternation; duplicates are
/// dropped. An empty list turns the filter into a no-op.
#[derive(Clone, Debug)]
pub struct StopWordCharFilter {
    /// The stop words, deduplicated, in list order
    words: Vec<String>,
    /// Compiled alternation, absent for an empty list
    pattern: Option<Regex>,
}

impl StopWordCharFilter {
    /// Create a new stop word filter with the default English stop words.
    pub fn new() -> Result<Self> {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a new stop word filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| !word.is_empty() && seen.insert(word.clone()))
            .collect();

        let pattern = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|word| regex::escape(word))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&format!(r"\b(?:{alternation})\b")).map_err(|e| {
                NewsvoteError::analysis(format!("Invalid stop word pattern: {e}"))
            })?;
            Some(regex)
        };

        Ok(StopWordCharFilter { words, pattern })
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl CharFilter for StopWordCharFilter {
    fn filter(&self, input: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(input, "").into_owned(),
            None => input.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
