use std::fmt;

use serde::{Deserialize, Serialize};

use super::char_stat::CharStat;

/// Statistics of every character observed after one context.
///
/// Entries are kept in first-observation order. That order is part of the
/// model: cumulative probabilities accumulate along it, so it decides which
/// character a draw landing exactly on a boundary resolves to.
///
/// ## Lifecycle
/// - Accumulation: `observe` is called once per training observation
/// - Finalization: `finalize` computes `p` and `cp` for every entry
///
/// ## Invariants
/// - At most one entry per distinct character
/// - Every entry has `count >= 1`
/// - After finalization, `cp` is non-decreasing and the last `cp` is 1.0
///   within floating-point tolerance
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CharStatSequence {
	entries: Vec<CharStat>,
}

impl CharStatSequence {
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records one occurrence of `character` after this context.
	///
	/// - If the character already has an entry, its count is increased.
	/// - Otherwise, a new entry with a count of 1 is appended.
	pub(crate) fn observe(&mut self, character: char) {
		match self.entries.iter_mut().find(|stat| stat.character() == character) {
			Some(stat) => stat.increment(),
			None => self.entries.push(CharStat::new(character)),
		}
	}

	/// Computes `p` and `cp` for every entry, in sequence order.
	///
	/// The denominator is the sum of all counts in the sequence.
	/// Does nothing on an empty sequence.
	pub(crate) fn finalize(&mut self) {
		let total = self.total_count();
		if total == 0 {
			return;
		}

		let mut cp = 0.0;
		for stat in &mut self.entries {
			stat.set_probabilities(total, cp);
			cp = stat.cumulative_probability();
		}
	}

	/// Resolves a draw `r` in `[0, 1)` to a character.
	///
	/// Returns the character of the first entry whose `cp >= r`, scanning in
	/// insertion order. A draw above the last `cp` (rounding can leave it a
	/// hair under 1.0) resolves to the last entry.
	///
	/// Returns `None` if the sequence is empty.
	pub fn select(&self, r: f64) -> Option<char> {
		self.entries
			.iter()
			.find(|stat| stat.cumulative_probability() >= r)
			.or_else(|| self.entries.last())
			.map(CharStat::character)
	}

	/// Sum of the counts of all entries.
	pub fn total_count(&self) -> usize {
		self.entries.iter().map(CharStat::count).sum()
	}

	/// Returns the entry for `character`, if it was observed.
	pub fn get(&self, character: char) -> Option<&CharStat> {
		self.entries.iter().find(|stat| stat.character() == character)
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &CharStat> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Display for CharStatSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for stat in &self.entries {
			if !first {
				write!(f, " ")?;
			}
			write!(f, "{}", stat)?;
			first = false;
		}
		Ok(())
	}
}
