use thiserror::Error;

/// Errors surfaced by training, construction and persistence.
///
/// Running out of known contexts while generating is not an error: the
/// generator simply stops and returns what it produced.
#[derive(Error, Debug)]
pub enum ModelError {
	#[error("Window length must be >= 1")]
	InvalidWindowLength,

	#[error("Training input has {len} characters, window length is {window_length}")]
	InvalidInput { len: usize, window_length: usize },

	#[error("Window length mismatch: expected {expected}, found {found}")]
	WindowMismatch { expected: usize, found: usize },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
