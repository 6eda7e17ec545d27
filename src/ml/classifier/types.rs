//! Common types for article classification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A news article as far as classification is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline.
    pub title: String,
    /// Summary or lead paragraph.
    #[serde(default)]
    pub summary: String,
}

impl Article {
    /// Create a new article.
    pub fn new<T: Into<String>, S: Into<String>>(title: T, summary: S) -> Self {
        Article {
            title: title.into(),
            summary: summary.into(),
        }
    }

    /// The text the classifier sees: title and summary joined by one space.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Training sample: an article with the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledArticle {
    /// The article.
    #[serde(flatten)]
    pub article: Article,
    /// Category label.
    pub category: String,
}

impl LabeledArticle {
    /// Create a new labeled article.
    pub fn new<S: Into<String>>(article: Article, category: S) -> Self {
        LabeledArticle {
            article,
            category: category.into(),
        }
    }
}

/// Source of training articles used to (re)build a model from scratch.
pub trait Corpus: Send + Sync {
    /// Every labeled article in the corpus.
    fn labeled_articles(&self) -> Result<Vec<LabeledArticle>>;
}

impl Corpus for Vec<LabeledArticle> {
    fn labeled_articles(&self) -> Result<Vec<LabeledArticle>> {
        Ok(self.clone())
    }
}

impl Corpus for [LabeledArticle] {
    fn labeled_articles(&self) -> Result<Vec<LabeledArticle>> {
        Ok(self.to_vec())
    }
}

/// Weight per category produced by scoring.
///
/// Weights lie in `[0, 1]` and sum to 1 whenever there was any evidence. An
/// empty distribution means the scored text had no features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    weights: BTreeMap<String, f64>,
}

impl Distribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// The uniform distribution over `categories`.
    pub fn uniform<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Self::new();
        }

        let weight = 1.0 / categories.len() as f64;
        Distribution {
            weights: categories.into_iter().map(|c| (c, weight)).collect(),
        }
    }

    /// Weight of a category, if it is part of the distribution.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.weights.get(category).copied()
    }

    /// Weight of a category, 0 when absent.
    pub fn weight(&self, category: &str) -> f64 {
        self.get(category).unwrap_or(0.0)
    }

    /// The heaviest category. Ties go to the category that sorts first.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (category, &weight) in &self.weights {
            if best.is_none_or(|(_, top)| weight > top) {
                best = Some((category.as_str(), weight));
            }
        }
        best
    }

    /// Number of categories in the distribution.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the distribution is empty ("no evidence").
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Iterate over `(category, weight)` in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(c, w)| (c.as_str(), *w))
    }

    pub(crate) fn add(&mut self, category: &str, weight: f64) {
        match self.weights.get_mut(category) {
            Some(total) => *total += weight,
            None => {
                self.weights.insert(category.to_string(), weight);
            }
        }
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        for weight in self.weights.values_mut() {
            *weight *= factor;
        }
    }
}

impl From<BTreeMap<String, f64>> for Distribution {
    fn from(weights: BTreeMap<String, f64>) -> Self {
        Distribution { weights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_text() {
        let article = Article::new("Rocket launch", "Delayed again");
        assert_eq!(article.text(), "Rocket launch Delayed again");
        assert_eq!(Article::new("Title", "").text(), "Title ");
    }

    #[test]
    fn test_labeled_article_json_shape() {
        let json = r#"{"title": "Rust 2.0", "summary": "released", "category": "interesting"}"#;
        let labeled: LabeledArticle = serde_json::from_str(json).unwrap();

        assert_eq!(labeled.article, Article::new("Rust 2.0", "released"));
        assert_eq!(labeled.category, "interesting");

        let without_summary: LabeledArticle =
            serde_json::from_str(r#"{"title": "x", "category": "boring"}"#).unwrap();
        assert_eq!(without_summary.article.summary, "");
    }

    #[test]
    fn test_vec_corpus() {
        let corpus = vec![LabeledArticle::new(Article::new("a", "b"), "boring")];
        assert_eq!(corpus.labeled_articles().unwrap().len(), 1);
        assert_eq!(corpus.as_slice().labeled_articles().unwrap().len(), 1);
    }

    #[test]
    fn test_uniform_distribution() {
        let distribution = Distribution::uniform(["interesting", "boring"]);
        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution.get("interesting"), Some(0.5));
        assert_eq!(distribution.get("boring"), Some(0.5));
        assert!(Distribution::uniform(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_best_category() {
        let mut distribution = Distribution::new();
        assert_eq!(distribution.best(), None);

        distribution.add("boring", 0.25);
        distribution.add("interesting", 0.75);
        assert_eq!(distribution.best(), Some(("interesting", 0.75)));

        let tied = Distribution::uniform(["interesting", "boring"]);
        assert_eq!(tied.best(), Some(("boring", 0.5)));
    }

    #[test]
    fn test_add_and_scale() {
        let mut distribution = Distribution::new();
        distribution.add("a", 1.0);
        distribution.add("a", 2.0);
        distribution.add("b", 1.0);
        distribution.scale(0.25);

        assert_eq!(distribution.weight("a"), 0.75);
        assert_eq!(distribution.weight("b"), 0.25);
        assert_eq!(distribution.weight("c"), 0.0);
        assert_eq!(distribution.total(), 1.0);
    }
}
