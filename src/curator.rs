//! Article curation on top of a persisted classifier.
//!
//! [`Curator`] owns the classifier for one settings store. Marking or
//! un-marking an article is one unit of work: stage, apply, save. Units are
//! serialized by a lock, and the in-memory classifier only changes once the
//! new state has been saved.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;

use crate::analysis::normalizer::TextNormalizer;
use crate::error::{NewsvoteError, Result};
use crate::ml::classifier::{
    Article, ClassifierConfig, Corpus, Distribution, TextClassifier, load_classifier,
    save_classifier,
};
use crate::storage::SettingsStore;

/// An article with its weight for the ranking category.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedArticle<'a> {
    /// The ranked article.
    pub article: &'a Article,
    /// Weight of the ranking category, `None` when the article had no
    /// features.
    pub weight: Option<f64>,
}

/// Trains and queries a classifier persisted in a settings store.
pub struct Curator<S: SettingsStore> {
    store: S,
    config: ClassifierConfig,
    corpus: Arc<dyn Corpus>,
    classifier: RwLock<TextClassifier>,
}

impl<S: SettingsStore> std::fmt::Debug for Curator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Curator")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}

impl<S: SettingsStore> Curator<S> {
    /// Load (or train from `corpus`) the classifier stored in `store`.
    pub fn open(
        store: S,
        normalizer: Arc<TextNormalizer>,
        config: ClassifierConfig,
        corpus: Arc<dyn Corpus>,
    ) -> Result<Self> {
        let classifier = load_classifier(&store, normalizer, &config, corpus.as_ref())?;

        Ok(Curator {
            store,
            config,
            corpus,
            classifier: RwLock::new(classifier),
        })
    }

    /// The settings store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The classifier configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// A copy of the current classifier.
    pub fn snapshot(&self) -> TextClassifier {
        self.classifier.read().clone()
    }

    /// Re-read the classifier from the store, retraining if it is gone.
    pub fn reload(&self) -> Result<()> {
        let mut classifier = self.classifier.write();
        let normalizer = Arc::clone(classifier.normalizer());
        *classifier =
            load_classifier(&self.store, normalizer, &self.config, self.corpus.as_ref())?;
        Ok(())
    }

    /// Train `article` into `category` and persist the result.
    pub fn mark(&self, article: &Article, category: &str) -> Result<()> {
        self.update(|classifier| classifier.add_article(article, category))?;
        tracing::info!(category, title = %article.title, "marked article");
        Ok(())
    }

    /// Retract a previous [`mark`](Self::mark) and persist the result.
    pub fn unmark(&self, article: &Article, category: &str) -> Result<()> {
        self.update(|classifier| classifier.remove_article(article, category))?;
        tracing::info!(category, title = %article.title, "unmarked article");
        Ok(())
    }

    fn update<F>(&self, stage: F) -> Result<()>
    where
        F: FnOnce(&mut TextClassifier) -> Result<()>,
    {
        let mut current = self.classifier.write();
        let mut next = current.clone();

        stage(&mut next)?;
        next.apply_changes();
        save_classifier(&self.store, &next, &self.config)?;

        *current = next;
        Ok(())
    }

    /// Score an article with the current classifier.
    pub fn classify(&self, article: &Article) -> Result<Distribution> {
        self.classifier.read().classify_article(article)
    }

    /// Order articles by their weight for `category`, heaviest first.
    ///
    /// Articles without features rank last; ties keep input order.
    pub fn rank<'a>(
        &self,
        articles: &'a [Article],
        category: &str,
    ) -> Result<Vec<RankedArticle<'a>>> {
        let classifier = self.classifier.read();
        if !classifier.model().has_category(category) {
            return Err(NewsvoteError::unknown_category(category));
        }

        let mut ranked = articles
            .par_iter()
            .map(|article| -> Result<RankedArticle<'a>> {
                let distribution = classifier.classify_article(article)?;
                Ok(RankedArticle {
                    article,
                    weight: distribution.get(category),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        ranked.sort_by(|a, b| match (a.weight, b.weight) {
            (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        Ok(ranked)
    }
}
