use std::fs::File;
use std::io;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads a text file and returns all its characters, in order.
///
/// - Reads the entire file into memory
/// - Line breaks are kept, they are characters like any other
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<char>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.chars().collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/input.txt` + `"w3.bin"` → `data/input.w3.bin`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}
