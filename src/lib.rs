//! # newsvote
//!
//! An incrementally trainable text classifier for curating news articles
//! into categories such as "interesting" and "boring".
//!
//! ## Features
//!
//! - Article text normalization pipeline (entities, contractions, stop words,
//!   irregular words, Porter stemming)
//! - Per-category running feature frequencies with staged training and an
//!   explicit commit step
//! - Frequency-share voting classifier
//! - Persistence through a pluggable settings store
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use newsvote::analysis::normalizer::TextNormalizer;
//! use newsvote::curator::Curator;
//! use newsvote::ml::classifier::{Article, ClassifierConfig, LabeledArticle};
//! use newsvote::storage::MemorySettingsStore;
//!
//! # fn main() -> newsvote::error::Result<()> {
//! let corpus = vec![
//!     LabeledArticle::new(Article::new("Rocket launch", "orbit reached"), "interesting"),
//!     LabeledArticle::new(Article::new("Tax forms", "deadline moved"), "boring"),
//! ];
//!
//! let curator = Curator::open(
//!     MemorySettingsStore::new(),
//!     Arc::new(TextNormalizer::new()?),
//!     ClassifierConfig::default(),
//!     Arc::new(corpus),
//! )?;
//!
//! curator.mark(&Article::new("New rocket engine", "tested"), "interesting")?;
//!
//! let articles = vec![Article::new("Tax update", ""), Article::new("Rocket test", "")];
//! let ranked = curator.rank(&articles, "interesting")?;
//! assert_eq!(ranked[0].article.title, "Rocket test");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod curator;
pub mod error;
pub mod ml;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
