use newsvote::ml::classifier::{FeatureCounts, FrequencyModel};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;
const FEATURES: [&str; 5] = ["alpha", "beta", "gamma", "delta", "omega"];

fn sample() -> impl Strategy<Value = FeatureCounts> {
    prop::collection::vec((0..FEATURES.len(), 1u64..4), 0..6).prop_map(|pairs| {
        let mut counts = FeatureCounts::new();
        for (feature, count) in pairs {
            counts.add_count(FEATURES[feature], count);
        }
        counts
    })
}

fn model() -> FrequencyModel {
    FrequencyModel::new(["interesting", "boring"]).unwrap()
}

fn train(model: &mut FrequencyModel, samples: &[FeatureCounts]) {
    for sample in samples {
        model.stage_add(sample, "interesting").unwrap();
    }
    model.apply();
}

proptest! {
    #[test]
    fn apply_without_staged_changes_is_a_no_op(samples in prop::collection::vec(sample(), 0..8)) {
        let mut model = model();
        train(&mut model, &samples);

        let before = model.clone();
        model.apply();
        prop_assert_eq!(model, before);
    }

    #[test]
    fn frequencies_are_mean_counts(
        first in prop::collection::vec(sample(), 1..6),
        second in prop::collection::vec(sample(), 1..6),
    ) {
        let mut model = model();
        train(&mut model, &first);
        train(&mut model, &second);

        let samples = (first.len() + second.len()) as f64;
        prop_assert_eq!(model.sample_count("interesting").unwrap(), samples as u64);

        for feature in FEATURES {
            let occurrences: u64 = first.iter().chain(&second).map(|s| s.get(feature)).sum();
            let frequency = model.frequency("interesting", feature).unwrap();
            prop_assert!(
                (frequency - occurrences as f64 / samples).abs() < TOLERANCE,
                "{}: {} != {}/{}", feature, frequency, occurrences, samples
            );
        }
    }

    #[test]
    fn removing_an_added_sample_restores_frequencies(
        base in prop::collection::vec(sample(), 1..6),
        extra in sample(),
    ) {
        let mut model = model();
        train(&mut model, &base);
        let before = model.clone();

        model.stage_add(&extra, "interesting").unwrap();
        model.apply();
        model.stage_remove(&extra, "interesting").unwrap();
        model.apply();

        prop_assert_eq!(
            model.sample_count("interesting").unwrap(),
            before.sample_count("interesting").unwrap()
        );
        for feature in FEATURES {
            let restored = model.frequency("interesting", feature).unwrap();
            let original = before.frequency("interesting", feature).unwrap();
            prop_assert!((restored - original).abs() < TOLERANCE);
        }
    }

    #[test]
    fn frequencies_stay_non_negative(
        base in prop::collection::vec(sample(), 1..6),
        removals in 0usize..6,
    ) {
        let mut model = model();
        train(&mut model, &base);

        for sample in base.iter().take(removals) {
            model.stage_remove(sample, "interesting").unwrap();
        }
        model.apply();

        let table = model.table("interesting").unwrap();
        prop_assert!(table.iter().all(|(_, frequency)| *frequency >= 0.0));
        prop_assert!(model.table("boring").unwrap().is_empty());
    }
}
