use std::fmt;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{ModelError, Result};
use super::char_stat_sequence::CharStatSequence;
use super::context_model::ContextModel;
use super::generator::Generator;
use super::trainer::Trainer;

/// A fixed-order character language model.
///
/// Owns the trained context table and the random source used for
/// generation.
///
/// # Responsibilities
/// - Train from a full pass over a character sequence
/// - Generate text from a seed
/// - Render the table for debugging
/// - Save and restore a trained table
///
/// # Notes
/// - Before `train`, the table is empty: every lookup misses, so `generate`
///   returns the seed's last window (or the seed itself when it is shorter
///   than the window).
/// - A seeded model produces the same texts on every run for the same corpus.
#[derive(Debug)]
pub struct LanguageModel {
	trainer: Trainer,
	contexts: ContextModel,
	rng: ChaCha8Rng,
}

impl LanguageModel {
	/// Creates an empty model.
	///
	/// - `Some(seed)`: deterministic random source, reproducible across runs.
	/// - `None`: random source seeded from system entropy.
	///
	/// # Errors
	/// Returns an error if `window_length == 0`.
	pub fn new(window_length: usize, seed: Option<u64>) -> Result<Self> {
		let trainer = Trainer::new(window_length)?;
		let rng = match seed {
			Some(seed) => ChaCha8Rng::seed_from_u64(seed),
			None => ChaCha8Rng::from_rng(&mut rand::rng()),
		};
		Ok(Self { trainer, contexts: ContextModel::new(window_length), rng })
	}

	/// Restores a model saved with [`save`](Self::save).
	///
	/// # Errors
	/// - I/O or decoding failures.
	/// - `WindowMismatch` if the file was trained with another window length.
	pub fn load<P: AsRef<Path>>(path: P, window_length: usize, seed: Option<u64>) -> Result<Self> {
		let mut model = Self::new(window_length, seed)?;
		let bytes = std::fs::read(path.as_ref())?;
		let contexts: ContextModel = postcard::from_bytes(&bytes)?;
		if contexts.window_length() != window_length {
			return Err(ModelError::WindowMismatch { expected: window_length, found: contexts.window_length() });
		}
		debug!(path = %path.as_ref().display(), contexts = contexts.len(), "model loaded");
		model.contexts = contexts;
		Ok(model)
	}

	/// Writes the trained table in postcard binary format.
	///
	/// The random source is not saved.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let bytes = postcard::to_stdvec(&self.contexts)?;
		std::fs::write(path.as_ref(), bytes)?;
		debug!(path = %path.as_ref().display(), contexts = self.contexts.len(), "model saved");
		Ok(())
	}

	/// Builds the table from a full pass over `characters`.
	///
	/// Any previously trained table is replaced.
	///
	/// # Errors
	/// Returns `InvalidInput` if there are fewer characters than the window
	/// length; the model is left unchanged.
	pub fn train<I>(&mut self, characters: I) -> Result<()>
	where
		I: IntoIterator<Item = char>,
	{
		self.contexts = self.trainer.train(characters)?;
		Ok(())
	}

	/// Generates text from `seed_text`, see [`Generator::generate`].
	///
	/// Consumes draws from the model's random source.
	pub fn generate(&mut self, seed_text: &str, output_length: usize) -> String {
		Generator::new(&self.contexts).generate(&mut self.rng, seed_text, output_length)
	}

	/// Debug rendering of the table, one line per context.
	///
	/// Contexts appear in first-seen order and entries in insertion order,
	/// as `key : (c count p cp) ...`.
	pub fn describe(&self) -> String {
		self.contexts.to_string()
	}

	pub fn window_length(&self) -> usize {
		self.trainer.window_length()
	}

	pub fn context_count(&self) -> usize {
		self.contexts.len()
	}

	/// Statistics following `context`, if it was seen during training.
	pub fn get(&self, context: &str) -> Option<&CharStatSequence> {
		self.contexts.get(context)
	}

	/// Read-only access to the trained table.
	pub fn contexts(&self) -> &ContextModel {
		&self.contexts
	}
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.contexts)
	}
}
