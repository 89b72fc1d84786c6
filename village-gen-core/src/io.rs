use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use crate::error::{GeneratorError, Result};

/// Reads a whole data document into memory.
///
/// - The file handle is closed before this function returns
/// - A missing file maps to `GeneratorError::NotFound`
pub(crate) fn read_document<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut file = match File::open(path) {
		Ok(file) => file,
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			return Err(GeneratorError::NotFound { path: path.to_path_buf() });
		}
		Err(e) => return Err(e.into()),
	};

	let mut contents = String::new();
	file.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Builds the path of a tagged data document.
///
/// Example:
/// `data` + `"plname"` + `"nordic"` → `data/plname_nordic.json`
pub(crate) fn build_data_path<P: AsRef<Path>>(data_dir: P, prefix: &str, tag: &str) -> PathBuf {
	data_dir.as_ref().join(format!("{prefix}_{tag}.json"))
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/plname_default.json"` → `"plname_default"`
/// - `"name_nordic.json"` → `"name_nordic"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths).
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	Ok(files)
}
