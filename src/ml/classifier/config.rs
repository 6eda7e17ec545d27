//! Classifier configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{NewsvoteError, Result};

/// Settings key of the persisted frequency tables.
pub const DEFAULT_COUNTS_KEY: &str = "classifier_counts";

/// Settings key of the persisted sample counts.
pub const DEFAULT_SAMPLE_COUNTS_KEY: &str = "classifier_sample_counts";

/// Configuration for an article classifier and its persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// The fixed category set.
    pub categories: Vec<String>,

    /// Settings key holding the per-category frequency tables.
    pub counts_key: String,

    /// Settings key holding the per-category sample counts.
    pub sample_counts_key: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            categories: vec!["interesting".to_string(), "boring".to_string()],
            counts_key: DEFAULT_COUNTS_KEY.to_string(),
            sample_counts_key: DEFAULT_SAMPLE_COUNTS_KEY.to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Use a different category set.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Use different settings keys.
    pub fn with_keys<C: Into<String>, S: Into<String>>(
        mut self,
        counts_key: C,
        sample_counts_key: S,
    ) -> Self {
        self.counts_key = counts_key.into();
        self.sample_counts_key = sample_counts_key.into();
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(NewsvoteError::invalid_argument(
                "Category set cannot be empty",
            ));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = self.categories.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(NewsvoteError::invalid_argument(format!(
                "Duplicate category: {duplicate}"
            )));
        }

        if self.counts_key.is_empty() || self.sample_counts_key.is_empty() {
            return Err(NewsvoteError::invalid_argument(
                "Settings keys cannot be empty",
            ));
        }

        if self.counts_key == self.sample_counts_key {
            return Err(NewsvoteError::invalid_argument(
                "Counts and sample counts must use different settings keys",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.categories, vec!["interesting", "boring"]);
        assert_eq!(config.counts_key, "classifier_counts");
        assert_eq!(config.sample_counts_key, "classifier_sample_counts");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ClassifierConfig::default()
            .with_categories(["keep", "drop", "later"])
            .with_keys("counts", "samples");

        assert_eq!(config.categories.len(), 3);
        assert_eq!(config.counts_key, "counts");
        assert_eq!(config.sample_counts_key, "samples");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let empty = ClassifierConfig::default().with_categories(Vec::<String>::new());
        assert!(empty.validate().is_err());

        let duplicate = ClassifierConfig::default().with_categories(["a", "a"]);
        assert!(duplicate.validate().is_err());

        let same_keys = ClassifierConfig::default().with_keys("k", "k");
        assert!(same_keys.validate().is_err());

        let blank_key = ClassifierConfig::default().with_keys("", "k");
        assert!(blank_key.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"categories": ["x", "y"]}"#).unwrap();

        assert_eq!(config.categories, vec!["x", "y"]);
        assert_eq!(config.counts_key, DEFAULT_COUNTS_KEY);
    }
}
