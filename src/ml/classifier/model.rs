//! Incremental frequency model.
//!
//! For each category the model keeps a [`FrequencyTable`]: the running mean
//! number of occurrences of every feature per committed sample. Training is
//! two-phase. `stage_add` / `stage_remove` only accumulate a
//! [`StagedChange`]; `apply` folds everything staged into the tables in one
//! O(|table|) pass per category:
//!
//! ```text
//! old = sample_count, new = old + staged_samples
//! table[f] = table[f] * old / new + staged[f] / new
//! ```
//!
//! After any sequence of applies, `table[f]` equals the total occurrences of
//! `f` over committed samples divided by the number of committed samples.

use std::collections::{BTreeMap, hash_map};

use ahash::AHashMap;

use crate::error::{NewsvoteError, Result};
use crate::ml::classifier::features::FeatureCounts;

/// Entries smaller than this in magnitude are dropped after `apply`.
pub const PRUNE_EPSILON: f64 = 1e-12;

/// Committed per-category state: feature frequencies plus the number of
/// samples they average over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    frequencies: AHashMap<String, f64>,
    sample_count: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from persisted parts.
    pub fn from_parts<I, S>(frequencies: I, sample_count: u64) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        FrequencyTable {
            frequencies: frequencies
                .into_iter()
                .map(|(feature, frequency)| (feature.into(), frequency))
                .collect(),
            sample_count,
        }
    }

    /// Frequency of a feature, 0 when absent.
    pub fn get(&self, feature: &str) -> f64 {
        self.frequencies.get(feature).copied().unwrap_or(0.0)
    }

    /// Check whether a feature has an entry.
    pub fn contains(&self, feature: &str) -> bool {
        self.frequencies.contains_key(feature)
    }

    /// Number of committed samples.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Number of features with an entry.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterate over `(feature, frequency)` in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.frequencies.iter()
    }

    /// Frequencies in feature order.
    pub fn to_sorted(&self) -> BTreeMap<String, f64> {
        self.frequencies
            .iter()
            .map(|(feature, frequency)| (feature.clone(), *frequency))
            .collect()
    }

    fn clear(&mut self) {
        self.frequencies.clear();
        self.sample_count = 0;
    }

    /// Fold a staged change into the table.
    fn fold(&mut self, staged: &StagedChange) {
        let old = self.sample_count as i64;
        let new = old + staged.sample_delta;
        if new <= 0 {
            self.clear();
            return;
        }

        let new_f = new as f64;
        let ratio = old as f64 / new_f;
        if ratio != 0.0 {
            for frequency in self.frequencies.values_mut() {
                *frequency *= ratio;
            }
        }

        for (feature, delta) in &staged.deltas {
            *self.frequencies.entry(feature.clone()).or_insert(0.0) += *delta as f64 / new_f;
        }

        self.frequencies
            .retain(|_, frequency| frequency.abs() >= PRUNE_EPSILON);
        self.sample_count = new as u64;
    }
}

/// Pending, uncommitted training deltas for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedChange {
    deltas: AHashMap<String, i64>,
    sample_delta: i64,
}

impl StagedChange {
    /// Create an empty change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Staged occurrence delta of a feature.
    pub fn delta(&self, feature: &str) -> i64 {
        self.deltas.get(feature).copied().unwrap_or(0)
    }

    /// Staged sample count delta.
    pub fn sample_delta(&self) -> i64 {
        self.sample_delta
    }

    /// Check if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty() && self.sample_delta == 0
    }

    fn stage(&mut self, features: &FeatureCounts, sign: i64) {
        for (feature, count) in features {
            let delta = self.deltas.entry(feature.clone()).or_insert(0);
            *delta += sign * *count as i64;
            if *delta == 0 {
                self.deltas.remove(feature);
            }
        }
        self.sample_delta += sign;
    }

    fn clear(&mut self) {
        self.deltas.clear();
        self.sample_delta = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct CategoryState {
    table: FrequencyTable,
    staged: StagedChange,
}

/// Per-category frequency tables over a fixed category set.
///
/// Not internally synchronized; callers that share a model across threads
/// serialize training and `apply` themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    categories: BTreeMap<String, CategoryState>,
}

impl FrequencyModel {
    /// Create an empty model over a fixed set of categories.
    ///
    /// The set must be non-empty and free of duplicates.
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut states = BTreeMap::new();
        for category in categories {
            let category = category.into();
            if states.insert(category.clone(), CategoryState::default()).is_some() {
                return Err(NewsvoteError::invalid_argument(format!(
                    "Duplicate category: {category}"
                )));
            }
        }

        if states.is_empty() {
            return Err(NewsvoteError::invalid_argument(
                "Category set cannot be empty",
            ));
        }

        Ok(FrequencyModel { categories: states })
    }

    /// Rebuild a model from committed tables, one per category.
    pub fn from_tables(tables: BTreeMap<String, FrequencyTable>) -> Result<Self> {
        if tables.is_empty() {
            return Err(NewsvoteError::invalid_argument(
                "Category set cannot be empty",
            ));
        }

        let categories = tables
            .into_iter()
            .map(|(category, table)| {
                let state = CategoryState {
                    table,
                    staged: StagedChange::new(),
                };
                (category, state)
            })
            .collect();

        Ok(FrequencyModel { categories })
    }

    /// The category labels in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Check whether a category belongs to the model.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    fn state(&self, category: &str) -> Result<&CategoryState> {
        self.categories
            .get(category)
            .ok_or_else(|| NewsvoteError::unknown_category(category))
    }

    fn state_mut(&mut self, category: &str) -> Result<&mut CategoryState> {
        self.categories
            .get_mut(category)
            .ok_or_else(|| NewsvoteError::unknown_category(category))
    }

    /// Stage one sample for `category`.
    pub fn stage_add(&mut self, features: &FeatureCounts, category: &str) -> Result<()> {
        self.state_mut(category)?.staged.stage(features, 1);
        Ok(())
    }

    /// Stage the retraction of one previously added sample from `category`.
    ///
    /// Rejected when the committed plus staged sample count would drop below
    /// zero. Whether the features were ever added is not checked.
    pub fn stage_remove(&mut self, features: &FeatureCounts, category: &str) -> Result<()> {
        self.ensure_removable(category, 1)?;
        self.state_mut(category)?.staged.stage(features, -1);
        Ok(())
    }

    /// Check that `samples` more removals can be staged for `category`.
    pub fn ensure_removable(&self, category: &str, samples: u64) -> Result<()> {
        let state = self.state(category)?;
        let available = state.table.sample_count as i64 + state.staged.sample_delta;
        if available < samples as i64 {
            return Err(NewsvoteError::invalid_operation(format!(
                "Cannot remove {samples} sample(s) from category '{category}' with {available} sample(s)"
            )));
        }
        Ok(())
    }

    /// Commit every staged change and clear it.
    pub fn apply(&mut self) {
        for (category, state) in self.categories.iter_mut() {
            if state.staged.is_empty() {
                continue;
            }

            let staged_samples = state.staged.sample_delta;
            state.table.fold(&state.staged);
            state.staged.clear();

            tracing::debug!(
                category = %category,
                staged_samples,
                sample_count = state.table.sample_count,
                features = state.table.len(),
                "applied staged change"
            );
        }
    }

    /// Drop every staged change without committing it.
    pub fn discard_staged(&mut self) {
        for state in self.categories.values_mut() {
            state.staged.clear();
        }
    }

    /// Check whether any category has staged changes.
    pub fn has_pending_changes(&self) -> bool {
        self.categories.values().any(|state| !state.staged.is_empty())
    }

    /// Committed frequency of `feature` in `category`.
    pub fn frequency(&self, category: &str, feature: &str) -> Result<f64> {
        Ok(self.state(category)?.table.get(feature))
    }

    /// Committed sample count of `category`.
    pub fn sample_count(&self, category: &str) -> Result<u64> {
        Ok(self.state(category)?.table.sample_count)
    }

    /// Committed table of `category`.
    pub fn table(&self, category: &str) -> Result<&FrequencyTable> {
        Ok(&self.state(category)?.table)
    }

    /// Staged change of `category`.
    pub fn staged(&self, category: &str) -> Result<&StagedChange> {
        Ok(&self.state(category)?.staged)
    }

    /// Iterate over `(category, committed table)` in category order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &FrequencyTable)> {
        self.categories
            .iter()
            .map(|(category, state)| (category.as_str(), &state.table))
    }
}
