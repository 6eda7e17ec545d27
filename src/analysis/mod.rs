//! Text analysis module.
//!
//! Provides the building blocks of the article normalizer: char filters that
//! rewrite raw text, a tokenizer, token filters, and the pipeline analyzer
//! that chains them.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use normalizer::{NormalizerConfig, TextNormalizer};
pub use token::{Token, TokenStream};
