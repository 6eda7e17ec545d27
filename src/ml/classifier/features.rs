//! Feature counting.

use std::collections::hash_map;

use ahash::AHashMap;

/// Occurrence count of every feature in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCounts {
    counts: AHashMap<String, u64>,
}

impl FeatureCounts {
    /// Create an empty count mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build counts from `(feature, count)` pairs. Repeated features add up.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut counts = Self::new();
        for (feature, count) in pairs {
            counts.add_count(feature, count);
        }
        counts
    }

    /// Count one more occurrence of a feature.
    pub fn add<S: Into<String>>(&mut self, feature: S) {
        self.add_count(feature, 1);
    }

    /// Count `count` more occurrences of a feature. A zero count is ignored.
    pub fn add_count<S: Into<String>>(&mut self, feature: S, count: u64) {
        if count > 0 {
            *self.counts.entry(feature.into()).or_insert(0) += count;
        }
    }

    /// Occurrences of a feature (0 when absent).
    pub fn get(&self, feature: &str) -> u64 {
        self.counts.get(feature).copied().unwrap_or(0)
    }

    /// Number of distinct features.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no feature was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences over all features.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(feature, count)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureCounts {
    fn from_iter<I: IntoIterator<Item = S>>(features: I) -> Self {
        let mut counts = FeatureCounts::new();
        for feature in features {
            counts.add(feature);
        }
        counts
    }
}

impl<'a> IntoIterator for &'a FeatureCounts {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Tally a feature sequence.
pub fn count<I, S>(features: I) -> FeatureCounts
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    features.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_features() {
        let counts = count(vec!["rocket", "launch", "rocket"]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("rocket"), 2);
        assert_eq!(counts.get("launch"), 1);
        assert_eq!(counts.get("delay"), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_empty_input() {
        let counts = count(Vec::<String>::new());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_from_pairs() {
        let counts = FeatureCounts::from_pairs(vec![("rocket", 2), ("launch", 1), ("idle", 0)]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("rocket"), 2);
        assert_eq!(counts.get("idle"), 0);
    }

    #[test]
    fn test_iteration() {
        let counts = count(vec!["a", "b", "a"]);
        let mut pairs: Vec<(String, u64)> = counts.iter().map(|(f, c)| (f.clone(), *c)).collect();
        pairs.sort();

        assert_eq!(pairs, vec![("a".to_string(), 2), ("b".to_string(), 1)]);
    }
}
