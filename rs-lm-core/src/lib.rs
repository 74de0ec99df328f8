//! Character-level Markov chain language model.
//!
//! This crate provides a fixed-order text model including:
//! - Per-context character statistics with insertion-ordered entries
//! - A sliding-window trainer producing a finalized probability table
//! - Inverse-CDF sampling generation driven by a seedable random source
//! - Compact binary persistence of trained tables
//!
//! The high-level entry point is [`model::language_model::LanguageModel`].

/// Markov model components, training and generation.
///
/// Exposes the `LanguageModel` facade and the read-only table types it is
/// built from.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading, path helpers).
pub mod io;

pub use error::{ModelError, Result};
pub use model::language_model::LanguageModel;
