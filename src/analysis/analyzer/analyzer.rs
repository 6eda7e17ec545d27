//! Core analyzer trait definition.
//!
//! An analyzer is a complete text processing pipeline, from raw text to the
//! final token stream:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use newsvote::analysis::analyzer::Analyzer;
//! use newsvote::analysis::token::{Token, TokenStream};
//! use newsvote::error::Result;
//!
//! struct WholeTextAnalyzer;
//!
//! impl Analyzer for WholeTextAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::once(Token::new(text, 0))))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "whole_text"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//!
//! let tokens: Vec<_> = WholeTextAnalyzer.analyze("a b").unwrap().collect();
//! assert_eq!(tokens[0].text, "a b");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve feature
/// extraction from several worker threads at once.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}
