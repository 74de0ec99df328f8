use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::char_stat::escape;
use super::char_stat_sequence::CharStatSequence;

/// Mapping from context window to the statistics of its successors.
///
/// Contexts are stored in first-seen order next to a key index, so that
/// lookups are constant time and every rendering of the table is
/// deterministic.
///
/// # Responsibilities
/// - Hold one `CharStatSequence` per distinct window
/// - Finalize every sequence once training is done
/// - Answer read-only lookups during generation
///
/// # Invariants
/// - Every key is exactly `window_length` characters long
/// - Every sequence is non-empty
/// - Only the trainer mutates the table
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(from = "ContextTable")]
pub struct ContextModel {
	window_length: usize,
	contexts: Vec<(String, CharStatSequence)>,
	#[serde(skip)]
	index: HashMap<String, usize>,
}

/// Serialized form of a `ContextModel`; the key index is rebuilt on load.
#[derive(Deserialize)]
struct ContextTable {
	window_length: usize,
	contexts: Vec<(String, CharStatSequence)>,
}

impl From<ContextTable> for ContextModel {
	fn from(table: ContextTable) -> Self {
		let index = table
			.contexts
			.iter()
			.enumerate()
			.map(|(position, (key, _))| (key.clone(), position))
			.collect();
		Self { window_length: table.window_length, contexts: table.contexts, index }
	}
}

impl ContextModel {
	/// Creates an empty table for windows of `window_length` characters.
	///
	/// An empty table misses every lookup.
	pub fn new(window_length: usize) -> Self {
		Self { window_length, contexts: Vec::new(), index: HashMap::new() }
	}

	/// Returns the sequence for `window`, inserting an empty one if absent.
	pub(crate) fn sequence_mut(&mut self, window: &str) -> &mut CharStatSequence {
		let position = match self.index.get(window) {
			Some(position) => *position,
			None => {
				self.contexts.push((window.to_owned(), CharStatSequence::new()));
				self.index.insert(window.to_owned(), self.contexts.len() - 1);
				self.contexts.len() - 1
			}
		};
		&mut self.contexts[position].1
	}

	/// Computes probabilities of every sequence.
	pub(crate) fn finalize(&mut self) {
		for (_, sequence) in &mut self.contexts {
			sequence.finalize();
		}
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Looks up the statistics following `context`.
	///
	/// Returns `None` if the window was never seen during training.
	pub fn get(&self, context: &str) -> Option<&CharStatSequence> {
		let position = self.index.get(context)?;
		Some(&self.contexts[*position].1)
	}

	/// Iterates over `(context, sequence)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &CharStatSequence)> {
		self.contexts.iter().map(|(key, sequence)| (key.as_str(), sequence))
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Total number of observations over all contexts.
	pub fn observation_count(&self) -> usize {
		self.contexts.iter().map(|(_, sequence)| sequence.total_count()).sum()
	}
}

impl fmt::Display for ContextModel {
	/// One line per context: `key : (c count p cp) ...`
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, sequence) in &self.contexts {
			let key: String = key.chars().map(escape).collect();
			writeln!(f, "{} : {}", key, sequence)?;
		}
		Ok(())
	}
}
