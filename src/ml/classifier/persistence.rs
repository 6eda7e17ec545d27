//! Loading and saving trained classifier state through a settings store.
//!
//! The committed state is stored as two JSON blobs: per-category frequency
//! tables (`{"interesting": {"rocket": 0.5}, ...}`) and per-category sample
//! counts (`{"interesting": 2, ...}`). A missing or unusable blob is never a
//! hard failure: the classifier is retrained from the corpus and saved again.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;
use crate::error::{NewsvoteError, Result};
use crate::ml::classifier::config::ClassifierConfig;
use crate::ml::classifier::model::{FrequencyModel, FrequencyTable};
use crate::ml::classifier::text_classifier::TextClassifier;
use crate::ml::classifier::types::Corpus;
use crate::storage::SettingsStore;

/// Serializable snapshot of a model's committed state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainedState {
    /// Category → feature → frequency.
    pub counts: BTreeMap<String, BTreeMap<String, f64>>,
    /// Category → committed sample count.
    pub sample_counts: BTreeMap<String, u64>,
}

impl TrainedState {
    /// Snapshot the committed tables of a model. Staged changes are ignored.
    pub fn from_model(model: &FrequencyModel) -> Self {
        let mut state = TrainedState::default();
        for (category, table) in model.tables() {
            state.counts.insert(category.to_string(), table.to_sorted());
            state
                .sample_counts
                .insert(category.to_string(), table.sample_count());
        }
        state
    }

    /// Parse the two persisted blobs.
    pub fn from_json(counts: &str, sample_counts: &str) -> Result<Self> {
        Ok(TrainedState {
            counts: serde_json::from_str(counts)?,
            sample_counts: serde_json::from_str(sample_counts)?,
        })
    }

    /// Serialize into the two blobs `(counts, sample_counts)`.
    pub fn to_json(&self) -> Result<(String, String)> {
        Ok((
            serde_json::to_string(&self.counts)?,
            serde_json::to_string(&self.sample_counts)?,
        ))
    }

    /// Rebuild a model over exactly `categories`.
    ///
    /// Fails when the snapshot covers a different category set or holds
    /// non-finite frequencies. Negative frequencies are valid: retracting a
    /// sample whose features changed since it was added commits them.
    pub fn into_model<I, S>(self, categories: I) -> Result<FrequencyModel>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = self.counts;
        let mut sample_counts = self.sample_counts;
        let mut tables = BTreeMap::new();

        for category in categories {
            let category = category.into();
            let frequencies = counts.remove(&category).ok_or_else(|| {
                NewsvoteError::invalid_argument(format!("No counts stored for '{category}'"))
            })?;
            let sample_count = sample_counts.remove(&category).ok_or_else(|| {
                NewsvoteError::invalid_argument(format!("No sample count stored for '{category}'"))
            })?;

            if let Some((feature, _)) = frequencies
                .iter()
                .find(|(_, frequency)| !frequency.is_finite())
            {
                return Err(NewsvoteError::invalid_argument(format!(
                    "Invalid frequency for '{feature}' in '{category}'"
                )));
            }

            tables.insert(category, FrequencyTable::from_parts(frequencies, sample_count));
        }

        if let Some(extra) = counts.keys().chain(sample_counts.keys()).next() {
            return Err(NewsvoteError::invalid_argument(format!(
                "Unexpected category '{extra}' in stored state"
            )));
        }

        FrequencyModel::from_tables(tables)
    }
}

/// Persist the committed state of a classifier.
pub fn save_classifier<S>(
    store: &S,
    classifier: &TextClassifier,
    config: &ClassifierConfig,
) -> Result<()>
where
    S: SettingsStore + ?Sized,
{
    if classifier.model().has_pending_changes() {
        tracing::debug!("saving classifier with staged changes; only committed state is stored");
    }

    let (counts, sample_counts) = TrainedState::from_model(classifier.model()).to_json()?;
    store.set(&config.counts_key, &counts)?;
    store.set(&config.sample_counts_key, &sample_counts)?;

    tracing::info!(
        counts_key = %config.counts_key,
        sample_counts_key = %config.sample_counts_key,
        "saved classifier state"
    );
    Ok(())
}

/// Read the persisted state back into a model.
///
/// `Ok(None)` means the state is missing or unusable; store failures are
/// errors.
fn read_model<S>(store: &S, config: &ClassifierConfig) -> Result<Option<FrequencyModel>>
where
    S: SettingsStore + ?Sized,
{
    let counts = store.get(&config.counts_key)?;
    let sample_counts = store.get(&config.sample_counts_key)?;

    let (Some(counts), Some(sample_counts)) = (counts, sample_counts) else {
        tracing::warn!(
            counts_key = %config.counts_key,
            sample_counts_key = %config.sample_counts_key,
            "classifier state not found"
        );
        return Ok(None);
    };

    match TrainedState::from_json(&counts, &sample_counts)
        .and_then(|state| state.into_model(config.categories.iter().cloned()))
    {
        Ok(model) => Ok(Some(model)),
        Err(e) => {
            tracing::warn!(error = %e, "stored classifier state is unusable");
            Ok(None)
        }
    }
}

/// Load a classifier from the settings store, retraining it from `corpus`
/// (and saving the result) when no usable state is stored.
pub fn load_classifier<S, C>(
    store: &S,
    normalizer: Arc<TextNormalizer>,
    config: &ClassifierConfig,
    corpus: &C,
) -> Result<TextClassifier>
where
    S: SettingsStore + ?Sized,
    C: Corpus + ?Sized,
{
    config.validate()?;

    if let Some(model) = read_model(store, config)? {
        tracing::info!(categories = model.category_count(), "loaded classifier state");
        return Ok(TextClassifier::with_model(normalizer, model));
    }

    tracing::info!("retraining classifier from corpus");
    let mut classifier = TextClassifier::new(normalizer, config.categories.iter().cloned())?;
    classifier.train(corpus)?;
    save_classifier(store, &classifier, config)?;

    Ok(classifier)
}
