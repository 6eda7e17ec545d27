//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text string before it reaches the
//! tokenizer. The article pipeline uses them for lowercasing, HTML entity
//! unescaping and the regex cleanup rewrites.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`html_entity::HtmlEntityCharFilter`] - HTML/XML character reference unescaping
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`stop::StopWordCharFilter`] - Whole-word stop word removal
//!
//! # Examples
//!
//! ```
//! use newsvote::analysis::char_filter::CharFilter;
//! use newsvote::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "").unwrap();
//! assert_eq!(filter.filter("year 2024"), "year ");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_entity;
pub mod lowercase;
pub mod pattern_replace;
pub mod stop;

pub use html_entity::{HtmlEntityCharFilter, unescape};
pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use stop::StopWordCharFilter;
