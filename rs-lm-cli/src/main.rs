//! Command-line front end.
//!
//! Trains a model on a corpus file and prints generated text:
//!
//! ```text
//! rs-lm 7 "Call me Ishmael" 1000 fixed data/moby_dick.txt
//! ```

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rs_lm_core::io::{build_output_path, read_corpus};
use rs_lm_core::LanguageModel;

/// Seed used by the deterministic mode when none is given.
const DEFAULT_SEED: u64 = 20;

/// Character-level Markov chain text generator
#[derive(Parser, Debug)]
#[command(name = "rs-lm")]
#[command(about = "Train a character language model on a corpus and generate text")]
struct Args {
	/// Number of preceding characters used as context
	window_length: usize,

	/// Text to start from (its last WINDOW_LENGTH characters seed the generation)
	initial_text: String,

	/// Number of characters to generate after the seed window
	length: usize,

	/// `random` for a new text on every run, anything else for a reproducible one
	mode: String,

	/// Corpus file to train on
	corpus: PathBuf,

	/// Random seed for the reproducible mode
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u64,

	/// Reuse (or write) a trained model next to the corpus, retrained when the corpus is newer
	#[arg(long)]
	cache: bool,

	/// Print the trained table instead of generating
	#[arg(long)]
	describe: bool,
}

impl Args {
	fn model_seed(&self) -> Option<u64> {
		if self.mode == "random" { None } else { Some(self.seed) }
	}

	/// Path of the cached model, `None` when caching is disabled.
	fn cache_path(&self) -> io::Result<Option<PathBuf>> {
		if !self.cache {
			return Ok(None);
		}
		build_output_path(&self.corpus, &format!("w{}.bin", self.window_length)).map(Some)
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Logs go to stderr, generated text to stdout
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rs_lm=info,rs_lm_core=info")),
		)
		.with_writer(std::io::stderr)
		.init();

	let mut model = load_or_train(&args)?;

	if args.describe {
		print!("{}", model.describe());
		return Ok(());
	}

	println!("{}", model.generate(&args.initial_text, args.length));
	Ok(())
}

/// Returns `true` if `cache` exists and was written after `corpus` last changed.
fn cache_is_fresh(cache: &Path, corpus: &Path) -> bool {
	let modified = |path: &Path| std::fs::metadata(path).and_then(|m| m.modified());
	match (modified(cache), modified(corpus)) {
		(Ok(cache), Ok(corpus)) => cache >= corpus,
		_ => false,
	}
}

/// Trains a model on the corpus, going through the cache when enabled.
///
/// A cache that cannot be read (stale format, other window length) or that
/// is older than the corpus is ignored and overwritten.
fn load_or_train(args: &Args) -> Result<LanguageModel, Box<dyn std::error::Error>> {
	let seed = args.model_seed();
	let cache_path = args.cache_path()?;

	if let Some(path) = cache_path.as_deref() {
		if cache_is_fresh(path, &args.corpus) {
			match LanguageModel::load(path, args.window_length, seed) {
				Ok(model) => {
					info!(path = %path.display(), contexts = model.context_count(), "using cached model");
					return Ok(model);
				}
				Err(e) => warn!(path = %path.display(), error = %e, "ignoring cached model"),
			}
		}
	}

	let corpus = read_corpus(&args.corpus)?;
	info!(path = %args.corpus.display(), characters = corpus.len(), "training");

	let mut model = LanguageModel::new(args.window_length, seed)?;
	model.train(corpus)?;
	info!(contexts = model.context_count(), "model trained");

	if let Some(path) = cache_path.as_deref() {
		model.save(path)?;
		info!(path = %path.display(), "model cached");
	}

	Ok(model)
}
