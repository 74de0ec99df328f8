//! Property tests over randomly generated corpora.
//!
//! These tests verify, for any corpus at least one window long:
//! - Probabilities of every context sum to 1.0
//! - Counts of every context match the number of times it was followed
//! - Seeded generation is reproducible
//! - Seeds shorter than the window pass through untouched

use std::collections::HashMap;

use proptest::prelude::*;
use rs_lm_core::LanguageModel;

const TOLERANCE: f64 = 1e-9;

/// Counts windows followed by a character, by brute force.
fn window_occurrences(corpus: &[char], window_length: usize) -> HashMap<String, usize> {
	let mut occurrences = HashMap::new();
	for slice in corpus.windows(window_length + 1) {
		let key: String = slice[..window_length].iter().collect();
		*occurrences.entry(key).or_insert(0) += 1;
	}
	occurrences
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn prop_probabilities_normalized(corpus in "[a-d \n]{8,120}", window_length in 1usize..5) {
		let mut model = LanguageModel::new(window_length, Some(20)).unwrap();
		model.train(corpus.chars()).unwrap();

		for (_, sequence) in model.contexts().iter() {
			let sum: f64 = sequence.iter().map(|s| s.probability()).sum();
			prop_assert!((sum - 1.0).abs() < TOLERANCE);

			let last = sequence.iter().last().unwrap();
			prop_assert!((last.cumulative_probability() - 1.0).abs() < TOLERANCE);

			let mut previous = 0.0;
			for stat in sequence.iter() {
				prop_assert!(stat.count() >= 1);
				prop_assert!(stat.cumulative_probability() >= previous);
				previous = stat.cumulative_probability();
			}
		}
	}

	#[test]
	fn prop_counts_conserved(corpus in "[a-c]{6,80}", window_length in 1usize..4) {
		let chars: Vec<char> = corpus.chars().collect();
		let mut model = LanguageModel::new(window_length, Some(20)).unwrap();
		model.train(chars.iter().copied()).unwrap();

		let expected = window_occurrences(&chars, window_length);
		prop_assert_eq!(model.context_count(), expected.len());
		for (key, occurrences) in &expected {
			prop_assert_eq!(key.chars().count(), window_length);
			prop_assert_eq!(model.get(key).unwrap().total_count(), *occurrences);
		}
	}

	#[test]
	fn prop_same_seed_same_output(corpus in "[a-e ]{10,100}", seed in any::<u64>(), length in 0usize..60) {
		let mut first = LanguageModel::new(2, Some(seed)).unwrap();
		let mut second = LanguageModel::new(2, Some(seed)).unwrap();
		first.train(corpus.chars()).unwrap();
		second.train(corpus.chars()).unwrap();

		let seed_text: String = corpus.chars().take(2).collect();
		let generated = first.generate(&seed_text, length);
		prop_assert_eq!(&generated, &second.generate(&seed_text, length));
		prop_assert!(generated.chars().count() <= length + 2);
	}

	#[test]
	fn prop_short_seed_passthrough(seed_text in "[a-z]{0,3}", length in 0usize..100) {
		let mut model = LanguageModel::new(4, Some(20)).unwrap();
		model.train("abcdefghijklmnopqrstuvwxyz".chars()).unwrap();
		prop_assert_eq!(model.generate(&seed_text, length), seed_text);
	}
}
