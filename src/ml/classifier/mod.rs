//! Incremental frequency-voting article classifier.
//!
//! # Architecture
//!
//! - `FeatureCounts`: bag of normalized features for one text
//! - `FrequencyModel`: per-category running feature frequencies with
//!   staged training and an explicit `apply` commit
//! - `TextClassifier`: normalizer + model, scoring by frequency share votes
//! - `Classifier` trait: common scoring interface
//! - `load_classifier` / `save_classifier`: persistence through a settings store
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use newsvote::analysis::normalizer::TextNormalizer;
//! use newsvote::ml::classifier::{Article, TextClassifier};
//!
//! # fn main() -> newsvote::error::Result<()> {
//! let normalizer = Arc::new(TextNormalizer::new()?);
//! let mut classifier = TextClassifier::new(normalizer, ["interesting", "boring"])?;
//!
//! classifier.add_article(&Article::new("Rocket launch", "orbit reached"), "interesting")?;
//! classifier.add_article(&Article::new("Tax forms", "deadline moved"), "boring")?;
//! classifier.apply_changes();
//!
//! let distribution = classifier.classify_text("another rocket")?;
//! assert_eq!(distribution.best().map(|(category, _)| category), Some("interesting"));
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod corpus;
mod features;
mod model;
mod persistence;
mod text_classifier;
mod types;

// Public exports
pub use classifier::Classifier;
pub use config::{ClassifierConfig, DEFAULT_COUNTS_KEY, DEFAULT_SAMPLE_COUNTS_KEY};
pub use corpus::{JsonFileCorpus, load_corpus, new_text_classifier};
pub use features::{FeatureCounts, count};
pub use model::{FrequencyModel, FrequencyTable, PRUNE_EPSILON, StagedChange};
pub use persistence::{TrainedState, load_classifier, save_classifier};
pub use text_classifier::TextClassifier;
pub use types::{Article, Corpus, Distribution, LabeledArticle};
