//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by the tokenizer and return a
//! new stream. They may rewrite, drop, or expand tokens.
//!
//! # Available Filters
//!
//! - [`irregular::IrregularWordFilter`] - Maps variant spellings to canonical forms
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Irregular Words → Stemmer → Features
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so a built pipeline can be shared across
/// threads behind an `Arc`.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod irregular;
pub mod stem;

pub use irregular::{IrregularWordFilter, IrregularWords};
pub use stem::{PorterStemmer, StemFilter, Stemmer};
