use std::fmt;

use serde::{Deserialize, Serialize};

/// Statistics of one character observed after a given context.
///
/// `count` is accumulated during training. `p` and `cp` are only meaningful
/// once the owning [`CharStatSequence`](super::char_stat_sequence::CharStatSequence)
/// has been finalized; before that they are `0.0`.
///
/// # Invariants
/// - `count >= 1`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CharStat {
	character: char,
	count: usize,
	/// Probability of `character` following the context.
	p: f64,
	/// Running sum of `p` up to and including this entry.
	cp: f64,
}

impl CharStat {
	/// Creates the statistics of a first observation.
	pub(crate) fn new(character: char) -> Self {
		Self { character, count: 1, p: 0.0, cp: 0.0 }
	}

	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times `character` followed the context during training.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.p
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cp
	}

	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	/// Sets `p` from the context total and `cp` from the previous entry's `cp`.
	pub(crate) fn set_probabilities(&mut self, total: usize, previous_cp: f64) {
		self.p = self.count as f64 / total as f64;
		self.cp = previous_cp + self.p;
	}
}

/// Renders `character` so that control characters stay on one line.
pub(crate) fn escape(character: char) -> String {
	match character {
		'\n' => "\\n".to_owned(),
		'\r' => "\\r".to_owned(),
		'\t' => "\\t".to_owned(),
		c => c.to_string(),
	}
}

impl fmt::Display for CharStat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", escape(self.character), self.count, self.p, self.cp)
	}
}
