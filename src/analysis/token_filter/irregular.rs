//! Irregular word canonicalization.
//!
//! The irregular-word table maps variant spellings (irregular verb forms,
//! plurals, abbreviations) to a canonical form before stemming. A canonical
//! form may span several words; the filter then expands one token into many.
//!
//! The resource format is line oriented: each line is a comma separated list
//! whose first field is the canonical form and whose remaining fields are the
//! variants that map to it.
//!
//! ```text
//! go,went,gone
//! machine learning,ml
//! ```
//!
//! # Examples
//!
//! ```
//! use newsvote::analysis::token_filter::irregular::IrregularWords;
//!
//! let words = IrregularWords::parse("go,went,gone\nmachine learning,ml");
//! assert_eq!(words.canonical("went"), Some("go"));
//! assert_eq!(words.canonical("ml"), Some("machine learning"));
//! assert_eq!(words.canonical("walk"), None);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// The irregular-word resource shipped with the crate.
const BUILTIN_IRREGULAR_WORDS: &str = include_str!("../../../resources/irregular_words.csv");

/// Variant spelling → canonical form lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IrregularWords {
    replacements: AHashMap<String, String>,
}

impl IrregularWords {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English table.
    pub fn english() -> Self {
        Self::parse(BUILTIN_IRREGULAR_WORDS)
    }

    /// Parse the resource format from a string.
    pub fn parse(content: &str) -> Self {
        let mut words = Self::new();
        for line in content.lines() {
            words.add_line(line);
        }
        words
    }

    /// Read the resource format from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Self::new();
        for line in reader.lines() {
            words.add_line(&line?);
        }
        Ok(words)
    }

    /// Load the resource format from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let words = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            variants = words.len(),
            "loaded irregular words"
        );
        Ok(words)
    }

    /// Register every variant on one resource line. Later lines win.
    fn add_line(&mut self, line: &str) {
        let mut fields = line.trim().split(',').map(|field| field.trim().to_lowercase());
        let Some(canonical) = fields.next() else {
            return;
        };
        for variant in fields.filter(|variant| !variant.is_empty()) {
            self.replacements.insert(variant, canonical.clone());
        }
    }

    /// Insert a single mapping.
    pub fn insert<V: Into<String>, C: Into<String>>(&mut self, variant: V, canonical: C) {
        self.replacements.insert(variant.into(), canonical.into());
    }

    /// Look up the canonical form of a variant.
    pub fn canonical(&self, word: &str) -> Option<&str> {
        self.replacements.get(word).map(String::as_str)
    }

    /// Iterate over the variant spellings.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.replacements.keys().map(String::as_str)
    }

    /// Number of variants in the table.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Filter that replaces variant tokens with their canonical words.
///
/// A canonical form is split on whitespace, so one token can become several
/// (or none, for an empty canonical form). Positions are renumbered.
#[derive(Clone, Debug)]
pub struct IrregularWordFilter {
    words: Arc<IrregularWords>,
}

impl IrregularWordFilter {
    /// Create a new irregular word filter over a table.
    pub fn new(words: Arc<IrregularWords>) -> Self {
        IrregularWordFilter { words }
    }

    /// Get the table used by this filter.
    pub fn words(&self) -> &IrregularWords {
        &self.words
    }
}

impl Filter for IrregularWordFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut expanded = Vec::new();
        for token in tokens {
            match self.words.canonical(&token.text) {
                Some(canonical) => {
                    for word in canonical.split_whitespace() {
                        expanded.push(Token::new(word, expanded.len()));
                    }
                }
                None => {
                    let position = expanded.len();
                    expanded.push(token.with_position(position));
                }
            }
        }

        Ok(expanded.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "irregular"
    }
}
