use std::collections::VecDeque;

use tracing::debug;

use crate::error::{ModelError, Result};
use super::context_model::ContextModel;

/// Builds a `ContextModel` by sliding a fixed-size window over a text.
///
/// Training is a single sequential pass: insertion order in every
/// `CharStatSequence` follows the traversal order of the input.
#[derive(Clone, Copy, Debug)]
pub struct Trainer {
	window_length: usize,
}

impl Trainer {
	/// Creates a trainer for windows of `window_length` characters.
	///
	/// # Errors
	/// Returns an error if `window_length == 0`.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength);
		}
		Ok(Self { window_length })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Counts every `window -> next character` observation, then finalizes.
	///
	/// # Behavior
	/// - The first window is the first `window_length` characters.
	/// - Each following character is observed under the current window,
	///   then the window advances by one character.
	/// - The window following the last character is never recorded.
	/// - Probabilities are computed once, after the whole pass.
	///
	/// # Errors
	/// Returns `InvalidInput` if the input is shorter than the window.
	pub fn train<I>(&self, characters: I) -> Result<ContextModel>
	where
		I: IntoIterator<Item = char>,
	{
		let mut characters = characters.into_iter();
		let mut window: VecDeque<char> = characters.by_ref().take(self.window_length).collect();
		if window.len() < self.window_length {
			return Err(ModelError::InvalidInput { len: window.len(), window_length: self.window_length });
		}

		let mut model = ContextModel::new(self.window_length);
		let mut key: String = window.iter().collect();
		for c in characters {
			model.sequence_mut(&key).observe(c);

			// Advance
			window.pop_front();
			window.push_back(c);
			key.clear();
			key.extend(window.iter());
		}

		model.finalize();
		debug!(
			window_length = self.window_length,
			contexts = model.len(),
			observations = model.observation_count(),
			"training complete"
		);

		Ok(model)
	}
}
