//! Top-level module for the character-level Markov model.
//!
//! This module provides:
//! - Single character statistics (`CharStat`)
//! - Insertion-ordered statistics of one context (`CharStatSequence`)
//! - The finalized context table (`ContextModel`)
//! - The sliding-window trainer (`Trainer`)
//! - Inverse-CDF sampling generation (`Generator`)
//! - A high-level model facade (`LanguageModel`)

/// One observed character within one context.
pub mod char_stat;

/// Insertion-ordered statistics of the characters following one context.
///
/// Supports count accumulation, probability finalization and
/// cumulative-probability lookup.
pub mod char_stat_sequence;

/// Mapping from context window to its character statistics.
///
/// Read-only once training completes.
pub mod context_model;

/// Sliding-window training over a character sequence.
pub mod trainer;

/// Character-by-character generation from a finalized table.
pub mod generator;

/// High-level model owning a table and a seedable random source.
///
/// Exposes training, generation, debug rendering and persistence.
pub mod language_model;
