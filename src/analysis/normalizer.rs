//! The article text normalizer.
//!
//! [`TextNormalizer`] is a fixed, ordered [`PipelineAnalyzer`] that turns raw
//! article text into feature strings:
//!
//! ```text
//! lowercase → unescape entities → contractions → stop words → tags → digits
//!     → tokenize → irregular words → Porter stem
//! ```
//!
//! The order matters: stop words are matched after contractions are folded,
//! and irregular-word lookup sees the raw (unstemmed) tokens.
//!
//! A normalizer is immutable once built. Build one at startup and share it
//! behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use newsvote::analysis::normalizer::{NormalizerConfig, TextNormalizer};
//!
//! let config = NormalizerConfig::default().with_stop_words(vec!["a".to_string()]);
//! let normalizer = TextNormalizer::with_config(config).unwrap();
//!
//! assert_eq!(normalizer.normalize("It's a test!! 123").unwrap(), vec!["it", "test"]);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{
    HtmlEntityCharFilter, LowercaseCharFilter, PatternReplaceCharFilter, StopWordCharFilter,
};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{IrregularWordFilter, IrregularWords, StemFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// Cleanup rewrites that run before stop word removal, in order.
const CONTRACTION_REWRITES: &[(&str, &str)] = &[
    (r"\bain't\b", ""),
    (r"\b(\w+)'(?:s|m|d|ve|re)\b", "${1}"),
    (r"\b(\w+)n't\b", "${1}"),
];

/// Cleanup rewrites that run after stop word removal, in order.
const MARKUP_REWRITES: &[(&str, &str)] = &[(r"<.*?>", " "), (r"\d+", "")];

/// Configuration for [`TextNormalizer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Stop words to strip. `None` selects the built-in English list.
    pub stop_words: Option<Vec<String>>,

    /// Irregular-word resource file. `None` selects the built-in table.
    pub irregular_words: Option<PathBuf>,
}

impl NormalizerConfig {
    /// Use a custom stop word list.
    pub fn with_stop_words(mut self, stop_words: Vec<String>) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Load irregular words from a resource file.
    pub fn with_irregular_words<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.irregular_words = Some(path.into());
        self
    }
}

/// Turns raw article text into a sequence of features.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    pipeline: PipelineAnalyzer,
}

impl TextNormalizer {
    /// Create a normalizer with the built-in stop words and irregular words.
    pub fn new() -> Result<Self> {
        Self::from_parts(StopWordCharFilter::new()?, IrregularWords::english())
    }

    /// Create a normalizer from a configuration.
    pub fn with_config(config: NormalizerConfig) -> Result<Self> {
        let stop_words = match config.stop_words {
            Some(words) => StopWordCharFilter::from_words(words)?,
            None => StopWordCharFilter::new()?,
        };
        let irregular_words = match config.irregular_words {
            Some(path) => IrregularWords::load(path)?,
            None => IrregularWords::english(),
        };

        Self::from_parts(stop_words, irregular_words)
    }

    /// Assemble the pipeline from an already built stop word filter and
    /// irregular-word table.
    pub fn from_parts(
        stop_words: StopWordCharFilter,
        irregular_words: IrregularWords,
    ) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let mut pipeline = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(HtmlEntityCharFilter::new()));

        for (pattern, replacement) in CONTRACTION_REWRITES {
            let rewrite = PatternReplaceCharFilter::new(pattern, replacement)?;
            pipeline = pipeline.add_char_filter(Arc::new(rewrite));
        }

        let shadowed = shadowed_variants(&stop_words, &irregular_words);
        if !shadowed.is_empty() {
            tracing::warn!(
                variants = ?shadowed,
                "irregular words removed earlier in the pipeline will never match"
            );
        }
        tracing::debug!(
            stop_words = stop_words.len(),
            irregular_words = irregular_words.len(),
            "building text normalizer"
        );
        pipeline = pipeline.add_char_filter(Arc::new(stop_words));

        for (pattern, replacement) in MARKUP_REWRITES {
            let rewrite = PatternReplaceCharFilter::new(pattern, replacement)?;
            pipeline = pipeline.add_char_filter(Arc::new(rewrite));
        }

        let pipeline = pipeline
            .add_filter(Arc::new(IrregularWordFilter::new(Arc::new(irregular_words))))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("article");

        Ok(TextNormalizer { pipeline })
    }

    /// Normalize text into its features, in text order.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.pipeline.analyze(text)?.map(|token| token.text).collect())
    }

    /// Run only the character-level cleanup (steps before tokenization).
    pub fn clean(&self, text: &str) -> String {
        self.pipeline.clean(text)
    }

    /// The underlying analysis pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.pipeline
    }
}

/// Variants that never reach the irregular-word filter: stop words and
/// anything containing a digit are stripped before tokenization.
fn shadowed_variants(stop_words: &StopWordCharFilter, words: &IrregularWords) -> Vec<String> {
    let mut shadowed: Vec<String> = words
        .variants()
        .filter(|variant| {
            variant.chars().any(|c| c.is_ascii_digit())
                || variant
                    .split_whitespace()
                    .any(|word| stop_words.is_stop_word(word))
        })
        .map(str::to_string)
        .collect();
    shadowed.sort();
    shadowed
}

impl Analyzer for TextNormalizer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "article"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
