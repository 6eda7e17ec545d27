//! Classifier trait definition.

use crate::error::Result;
use crate::ml::classifier::types::Distribution;

/// Article classifier trait.
///
/// Implementations score raw text against a set of categories.
pub trait Classifier: Send + Sync {
    /// Score text, returning a weight per category.
    ///
    /// An empty distribution means the text carried no evidence at all.
    fn classify(&self, text: &str) -> Result<Distribution>;

    /// The most likely category for the text, if there was any evidence.
    fn predict(&self, text: &str) -> Result<Option<String>> {
        Ok(self
            .classify(text)?
            .best()
            .map(|(category, _)| category.to_string()))
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
