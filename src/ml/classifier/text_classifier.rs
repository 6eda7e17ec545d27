//! Frequency-voting article classifier.
//!
//! Scoring is a vote: every feature occurrence in the scored text casts a
//! ballot split between categories in proportion to the feature's committed
//! frequency in each, and the ballots are averaged. A feature no category has
//! seen votes uniformly.

use std::sync::Arc;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::analysis::normalizer::TextNormalizer;
use crate::error::{NewsvoteError, Result};
use crate::ml::classifier::classifier::Classifier;
use crate::ml::classifier::features::{FeatureCounts, count};
use crate::ml::classifier::model::FrequencyModel;
use crate::ml::classifier::types::{Article, Corpus, Distribution, LabeledArticle};

/// Incrementally trainable article classifier.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    normalizer: Arc<TextNormalizer>,
    model: FrequencyModel,
}

impl TextClassifier {
    /// Create an untrained classifier over a fixed category set.
    pub fn new<I, S>(normalizer: Arc<TextNormalizer>, categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(TextClassifier {
            normalizer,
            model: FrequencyModel::new(categories)?,
        })
    }

    /// Wrap an existing model.
    pub fn with_model(normalizer: Arc<TextNormalizer>, model: FrequencyModel) -> Self {
        TextClassifier { normalizer, model }
    }

    /// The frequency model.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// The text normalizer.
    pub fn normalizer(&self) -> &Arc<TextNormalizer> {
        &self.normalizer
    }

    /// Normalize and count the features of a text.
    pub fn features(&self, text: &str) -> Result<FeatureCounts> {
        Ok(count(self.normalizer.normalize(text)?))
    }

    /// Features of an article's title and summary.
    pub fn article_features(&self, article: &Article) -> Result<FeatureCounts> {
        self.features(&article.text())
    }

    /// Distribution of a single feature over the categories.
    pub fn score_one(&self, feature: &str) -> Distribution {
        let frequencies: Vec<(&str, f64)> = self
            .model
            .tables()
            .map(|(category, table)| (category, table.get(feature)))
            .collect();
        let sum: f64 = frequencies.iter().map(|(_, frequency)| frequency).sum();

        if sum == 0.0 {
            return Distribution::uniform(self.model.categories());
        }

        let mut distribution = Distribution::new();
        for (category, frequency) in frequencies {
            distribution.add(category, frequency / sum);
        }
        distribution
    }

    /// Average the per-feature distributions over every feature occurrence.
    ///
    /// Empty input yields an empty distribution.
    pub fn score(&self, features: &FeatureCounts) -> Distribution {
        let mut total = Distribution::new();
        let mut length = 0u64;

        for (feature, &occurrences) in features {
            if occurrences == 0 {
                continue;
            }
            for (category, weight) in self.score_one(feature).iter() {
                total.add(category, weight * occurrences as f64);
            }
            length += occurrences;
        }

        if length == 0 {
            return Distribution::new();
        }

        total.scale(1.0 / length as f64);
        total
    }

    /// Score raw text.
    pub fn classify_text(&self, text: &str) -> Result<Distribution> {
        Ok(self.score(&self.features(text)?))
    }

    /// Score an article's title and summary.
    pub fn classify_article(&self, article: &Article) -> Result<Distribution> {
        Ok(self.score(&self.article_features(article)?))
    }

    /// Stage one sample.
    pub fn add_sample(&mut self, features: &FeatureCounts, category: &str) -> Result<()> {
        self.model.stage_add(features, category)
    }

    /// Stage the retraction of one sample.
    pub fn remove_sample(&mut self, features: &FeatureCounts, category: &str) -> Result<()> {
        self.model.stage_remove(features, category)
    }

    /// Stage several samples. Nothing is staged unless every category is known.
    pub fn add_samples(&mut self, samples: &[(FeatureCounts, String)]) -> Result<()> {
        self.check_categories(samples.iter().map(|(_, category)| category.as_str()))?;
        for (features, category) in samples {
            self.model.stage_add(features, category)?;
        }
        Ok(())
    }

    /// Stage the retraction of several samples. Nothing is staged unless
    /// every category is known and holds enough samples.
    pub fn remove_samples(&mut self, samples: &[(FeatureCounts, String)]) -> Result<()> {
        self.check_removals(samples.iter().map(|(_, category)| category.as_str()))?;
        for (features, category) in samples {
            self.model.stage_remove(features, category)?;
        }
        Ok(())
    }

    /// Stage an article.
    pub fn add_article(&mut self, article: &Article, category: &str) -> Result<()> {
        let features = self.article_features(article)?;
        self.model.stage_add(&features, category)
    }

    /// Stage the retraction of an article.
    pub fn remove_article(&mut self, article: &Article, category: &str) -> Result<()> {
        let features = self.article_features(article)?;
        self.model.stage_remove(&features, category)
    }

    /// Stage a batch of labeled articles. Features are extracted in parallel.
    pub fn add_articles(&mut self, articles: &[LabeledArticle]) -> Result<usize> {
        self.check_categories(articles.iter().map(|a| a.category.as_str()))?;
        let samples = self.extract_batch(articles)?;
        for (features, labeled) in samples.iter().zip(articles) {
            self.model.stage_add(features, &labeled.category)?;
        }

        tracing::debug!(articles = articles.len(), "staged article batch");
        Ok(articles.len())
    }

    /// Stage the retraction of a batch of labeled articles.
    pub fn remove_articles(&mut self, articles: &[LabeledArticle]) -> Result<usize> {
        self.check_removals(articles.iter().map(|a| a.category.as_str()))?;
        let samples = self.extract_batch(articles)?;
        for (features, labeled) in samples.iter().zip(articles) {
            self.model.stage_remove(features, &labeled.category)?;
        }

        tracing::debug!(articles = articles.len(), "staged article retraction batch");
        Ok(articles.len())
    }

    /// Commit everything staged.
    pub fn apply_changes(&mut self) {
        self.model.apply();
    }

    /// Drop everything staged.
    pub fn discard_changes(&mut self) {
        self.model.discard_staged();
    }

    /// Stage every article of a corpus and commit. Returns the number of
    /// articles trained on.
    pub fn train<C: Corpus + ?Sized>(&mut self, corpus: &C) -> Result<usize> {
        let articles = corpus.labeled_articles()?;
        let trained = self.add_articles(&articles)?;
        self.apply_changes();

        tracing::info!(articles = trained, "trained classifier from corpus");
        Ok(trained)
    }

    fn extract_batch(&self, articles: &[LabeledArticle]) -> Result<Vec<FeatureCounts>> {
        articles
            .par_iter()
            .map(|labeled| self.article_features(&labeled.article))
            .collect()
    }

    fn check_categories<'a, I>(&self, categories: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for category in categories {
            if !self.model.has_category(category) {
                return Err(NewsvoteError::unknown_category(category));
            }
        }
        Ok(())
    }

    fn check_removals<'a, I>(&self, categories: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut removals: AHashMap<&str, u64> = AHashMap::new();
        for category in categories {
            *removals.entry(category).or_insert(0) += 1;
        }
        for (category, samples) in removals {
            self.model.ensure_removable(category, samples)?;
        }
        Ok(())
    }
}

impl Classifier for TextClassifier {
    fn classify(&self, text: &str) -> Result<Distribution> {
        self.classify_text(text)
    }

    fn name(&self) -> &str {
        "frequency_vote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::StopWordCharFilter;
    use crate::analysis::token_filter::IrregularWords;

    const EPS: f64 = 1e-9;

    fn normalizer() -> Arc<TextNormalizer> {
        Arc::new(TextNormalizer::new().unwrap())
    }

    fn classifier() -> TextClassifier {
        TextClassifier::new(normalizer(), ["interesting", "boring"]).unwrap()
    }

    fn counts(pairs: &[(&str, u64)]) -> FeatureCounts {
        FeatureCounts::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_launch_scenario() {
        let mut classifier = classifier();
        classifier
            .add_sample(&counts(&[("rocket", 2), ("launch", 1)]), "interesting")
            .unwrap();
        classifier
            .add_sample(&counts(&[("launch", 1), ("delay", 1)]), "boring")
            .unwrap();
        classifier.apply_changes();

        let distribution = classifier.score(&counts(&[("launch", 1)]));
        assert_eq!(distribution.get("interesting"), Some(0.5));
        assert_eq!(distribution.get("boring"), Some(0.5));

        let rocket = classifier.score_one("rocket");
        assert_eq!(rocket.get("interesting"), Some(1.0));
        assert_eq!(rocket.get("boring"), Some(0.0));
    }

    #[test]
    fn test_unseen_feature_is_uniform() {
        let classifier = TextClassifier::new(normalizer(), ["a", "b", "c", "d"]).unwrap();
        let distribution = classifier.score_one("never-seen");

        assert_eq!(distribution.len(), 4);
        for (_, weight) in distribution.iter() {
            assert_eq!(weight, 0.25);
        }
    }

    #[test]
    fn test_score_weights_occurrences() {
        let mut classifier = classifier();
        classifier
            .add_sample(&counts(&[("rocket", 1)]), "interesting")
            .unwrap();
        classifier
            .add_sample(&counts(&[("tax", 1)]), "boring")
            .unwrap();
        classifier.apply_changes();

        // rocket votes (1, 0) three times, tax votes (0, 1) once.
        let distribution = classifier.score(&counts(&[("rocket", 3), ("tax", 1)]));
        assert!((distribution.weight("interesting") - 0.75).abs() < EPS);
        assert!((distribution.weight("boring") - 0.25).abs() < EPS);
        assert!((distribution.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_share_not_posterior() {
        let mut classifier = classifier();
        classifier
            .add_sample(&counts(&[("chip", 3)]), "interesting")
            .unwrap();
        classifier
            .add_sample(&counts(&[("chip", 1)]), "boring")
            .unwrap();
        classifier
            .add_sample(&counts(&[("stock", 1)]), "boring")
            .unwrap();
        classifier.apply_changes();

        // interesting: chip = 3/1, boring: chip = 1/2. Share = 3 / 3.5.
        let distribution = classifier.score_one("chip");
        assert!((distribution.weight("interesting") - 3.0 / 3.5).abs() < EPS);
        assert!((distribution.weight("boring") - 0.5 / 3.5).abs() < EPS);
    }

    #[test]
    fn test_empty_input_scores_empty() {
        let classifier = classifier();
        assert!(classifier.score(&FeatureCounts::new()).is_empty());
        assert!(classifier.classify_text("").unwrap().is_empty());
        assert!(classifier.classify_text("the and of").unwrap().is_empty());
        assert_eq!(classifier.predict("").unwrap(), None);
    }

    #[test]
    fn test_article_training() {
        let mut classifier = classifier();
        let articles = vec![
            LabeledArticle::new(
                Article::new("Rocket launches", "A new rocket launched today"),
                "interesting",
            ),
            LabeledArticle::new(
                Article::new("Quarterly taxes", "Taxes are due again"),
                "boring",
            ),
        ];

        assert_eq!(classifier.train(&articles).unwrap(), 2);
        assert_eq!(classifier.model().sample_count("interesting").unwrap(), 1);
        assert_eq!(classifier.model().sample_count("boring").unwrap(), 1);

        let rocket = Article::new("Rocket", "");
        assert_eq!(
            classifier.predict(&rocket.text()).unwrap().as_deref(),
            Some("interesting")
        );
        let distribution = classifier
            .classify_article(&Article::new("Tax news", "taxes"))
            .unwrap();
        assert!(distribution.weight("boring") > distribution.weight("interesting"));
    }

    #[test]
    fn test_article_add_and_remove_round_trip() {
        let mut classifier = classifier();
        let article = Article::new("Rocket launch", "delayed");

        classifier.add_article(&article, "interesting").unwrap();
        classifier.apply_changes();
        assert_eq!(classifier.model().sample_count("interesting").unwrap(), 1);

        classifier.remove_article(&article, "interesting").unwrap();
        classifier.apply_changes();
        assert_eq!(classifier.model().sample_count("interesting").unwrap(), 0);
        assert!(classifier.model().table("interesting").unwrap().is_empty());
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let mut classifier = classifier();
        let batch = vec![
            LabeledArticle::new(Article::new("Rocket", ""), "interesting"),
            LabeledArticle::new(Article::new("Spam", ""), "spam"),
        ];

        assert!(matches!(
            classifier.add_articles(&batch),
            Err(NewsvoteError::UnknownCategory(_))
        ));
        assert!(!classifier.model().has_pending_changes());

        let removal = vec![LabeledArticle::new(Article::new("Rocket", ""), "interesting")];
        assert!(matches!(
            classifier.remove_articles(&removal),
            Err(NewsvoteError::InvalidOperation(_))
        ));
        assert!(!classifier.model().has_pending_changes());
    }

    #[test]
    fn test_sample_batches() {
        let mut classifier = classifier();
        let samples = vec![
            (counts(&[("rocket", 1)]), "interesting".to_string()),
            (counts(&[("rocket", 1)]), "interesting".to_string()),
        ];
        classifier.add_samples(&samples).unwrap();
        classifier.apply_changes();
        assert_eq!(classifier.model().sample_count("interesting").unwrap(), 2);

        classifier.remove_samples(&samples).unwrap();
        classifier.apply_changes();
        assert_eq!(classifier.model().sample_count("interesting").unwrap(), 0);

        assert!(classifier.remove_samples(&samples[..1]).is_err());
    }

    #[test]
    fn test_discard_changes() {
        let mut classifier = classifier();
        classifier
            .add_sample(&counts(&[("rocket", 1)]), "interesting")
            .unwrap();
        classifier.discard_changes();
        classifier.apply_changes();
        assert_eq!(classifier.model().sample_count("interesting").unwrap(), 0);
    }

    #[test]
    fn test_custom_normalizer_features() {
        let normalizer = TextNormalizer::from_parts(
            StopWordCharFilter::from_words(["a"]).unwrap(),
            IrregularWords::parse("go,went"),
        )
        .unwrap();
        let classifier = TextClassifier::new(Arc::new(normalizer), ["x"]).unwrap();

        let features = classifier.features("It's a test, it went! 42").unwrap();
        assert_eq!(features.get("it"), 2);
        assert_eq!(features.get("test"), 1);
        assert_eq!(features.get("go"), 1);
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn test_trait_object() {
        let classifier: Box<dyn Classifier> = Box::new(classifier());
        assert_eq!(classifier.name(), "frequency_vote");
        assert_eq!(classifier.classify("rocket").unwrap().len(), 2);
    }
}
