//! Corpus loading and classifier construction helpers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::normalizer::TextNormalizer;
use crate::error::Result;
use crate::ml::classifier::config::ClassifierConfig;
use crate::ml::classifier::text_classifier::TextClassifier;
use crate::ml::classifier::types::{Corpus, LabeledArticle};

/// Load labeled articles from a JSON array file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledArticle>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let articles: Vec<LabeledArticle> = serde_json::from_str(&content)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        articles = articles.len(),
        "loaded corpus"
    );
    Ok(articles)
}

/// A corpus read from a JSON file each time it is asked for articles.
#[derive(Debug, Clone)]
pub struct JsonFileCorpus {
    path: PathBuf,
}

impl JsonFileCorpus {
    /// Create a corpus backed by a JSON array file.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFileCorpus { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Corpus for JsonFileCorpus {
    fn labeled_articles(&self) -> Result<Vec<LabeledArticle>> {
        load_corpus(&self.path)
    }
}

/// Create an untrained classifier for a configuration.
pub fn new_text_classifier(
    normalizer: Arc<TextNormalizer>,
    config: &ClassifierConfig,
) -> Result<TextClassifier> {
    config.validate()?;
    TextClassifier::new(normalizer, config.categories.iter().cloned())
}
