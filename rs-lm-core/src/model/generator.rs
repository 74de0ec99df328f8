use rand::Rng;

use super::char_stat_sequence::CharStatSequence;
use super::context_model::ContextModel;

/// Generates text one character at a time from a finalized table.
///
/// The generator holds no state between calls; within a call the only state
/// is the current window and the text produced so far.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	model: &'a ContextModel,
}

impl<'a> Generator<'a> {
	pub fn new(model: &'a ContextModel) -> Self {
		Self { model }
	}

	/// Extends the tail of `seed_text` by up to `output_length` characters.
	///
	/// # Behavior
	/// - If `seed_text` is shorter than the window, it is returned unchanged.
	/// - Otherwise the result starts with the last `window_length` characters
	///   of `seed_text`, and grows until it holds
	///   `output_length + window_length` characters.
	/// - Generation stops early, without error, as soon as the current
	///   window was never seen during training.
	///
	/// # Notes
	/// - UTF-8 safe: lengths are counted in characters.
	/// - One draw is taken from `rng` per generated character, so a seeded
	///   source makes the output reproducible.
	pub fn generate<R: Rng>(&self, rng: &mut R, seed_text: &str, output_length: usize) -> String {
		let window_length = self.model.window_length();
		let mut result: Vec<char> = seed_text.chars().collect();
		if result.len() < window_length {
			return seed_text.to_owned();
		}
		result.drain(..result.len() - window_length);

		let target = output_length.saturating_add(window_length);
		let mut window: String = result.iter().collect();
		while result.len() < target {
			let Some(sequence) = self.model.get(&window) else {
				break;
			};
			let Some(c) = Self::sample_char(sequence, rng) else {
				break;
			};
			result.push(c);

			window.clear();
			window.extend(&result[result.len() - window_length..]);
		}

		result.into_iter().collect()
	}

	/// Draws `r` uniformly from `[0, 1)` and resolves it against the
	/// cumulative probabilities of `sequence`.
	///
	/// Returns `None` only for an empty sequence, which a trained table
	/// never contains.
	pub fn sample_char<R: Rng>(sequence: &CharStatSequence, rng: &mut R) -> Option<char> {
		let r: f64 = rng.random();
		sequence.select(r)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::trainer::Trainer;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	fn trained(corpus: &str, window_length: usize) -> ContextModel {
		Trainer::new(window_length).unwrap().train(corpus.chars()).unwrap()
	}

	#[test]
	fn short_seed_returned_unchanged() {
		let model = trained("abcabc", 3);
		let mut rng = ChaCha8Rng::seed_from_u64(1);
		assert_eq!(Generator::new(&model).generate(&mut rng, "ab", 10), "ab");
		assert_eq!(Generator::new(&model).generate(&mut rng, "", 10), "");
	}

	#[test]
	fn single_successor_chain_is_forced() {
		let model = trained("abcabcabc", 3);
		let mut rng = ChaCha8Rng::seed_from_u64(7);
		assert_eq!(Generator::new(&model).generate(&mut rng, "abc", 6), "abcabcabc");
	}

	#[test]
	fn result_starts_from_seed_tail() {
		let model = trained("abcabcabc", 3);
		let mut rng = ChaCha8Rng::seed_from_u64(7);
		assert_eq!(Generator::new(&model).generate(&mut rng, "xyzbca", 2), "bcabc");
	}

	#[test]
	fn zero_length_returns_window() {
		let model = trained("abcabcabc", 3);
		let mut rng = ChaCha8Rng::seed_from_u64(7);
		assert_eq!(Generator::new(&model).generate(&mut rng, "zzabc", 0), "abc");
	}

	#[test]
	fn unknown_context_stops_generation() {
		let model = trained("aaab", 3);
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		let generator = Generator::new(&model);
		assert_eq!(generator.generate(&mut rng, "aaab", 10), "aab");
		assert_eq!(generator.generate(&mut rng, "aaa", 10), "aaab");
	}

	#[test]
	fn maximal_length_does_not_overflow() {
		let model = trained("aaab", 3);
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		let generator = Generator::new(&model);
		assert_eq!(generator.generate(&mut rng, "aaa", usize::MAX), "aaab");
		assert_eq!(generator.generate(&mut rng, "aab", usize::MAX), "aab");
	}

	#[test]
	fn empty_model_never_extends() {
		let model = ContextModel::new(2);
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		assert_eq!(Generator::new(&model).generate(&mut rng, "hello", 10), "lo");
	}

	#[test]
	fn sample_char_only_returns_observed() {
		let model = trained("abacadaeaf", 1);
		let sequence = model.get("a").unwrap();
		let mut rng = ChaCha8Rng::seed_from_u64(11);
		for _ in 0..200 {
			let c = Generator::sample_char(sequence, &mut rng).unwrap();
			assert!("bcdef".contains(c));
		}
	}

	#[test]
	fn same_seed_same_text() {
		let model = trained("the cat sat on the mat and the rat ate the hat", 2);
		let generator = Generator::new(&model);
		let first = generator.generate(&mut ChaCha8Rng::seed_from_u64(42), "th", 40);
		let second = generator.generate(&mut ChaCha8Rng::seed_from_u64(42), "th", 40);
		assert_eq!(first, second);
	}
}
