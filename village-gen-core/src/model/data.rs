use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::io;

/// File prefix of place-root documents (`plname_<tag>.json`).
pub const PLACE_PREFIX: &str = "plname";

/// File prefix of resident-name documents (`name_<tag>.json`).
pub const NAME_PREFIX: &str = "name";

/// Ordered, non-empty list of place-name roots for one type tag.
///
/// # Invariants
/// - `roots` always holds at least one entry
/// - The list is never modified after construction
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlaceRootSet {
	tag: String,
	roots: Vec<String>,
}

impl PlaceRootSet {
	/// Creates a root set from an in-memory list.
	///
	/// # Errors
	/// Returns an error if `roots` is empty.
	pub fn new(tag: &str, roots: Vec<String>) -> std::result::Result<Self, String> {
		if roots.is_empty() {
			return Err("place_roots must be a non-empty list".to_owned());
		}
		Ok(Self { tag: tag.to_owned(), roots })
	}

	/// Loads the `place_roots` list of `tag` from `<data_dir>/plname_<tag>.json`.
	///
	/// # Errors
	/// - `NotFound` if the document does not exist
	/// - `Format` if it is not valid JSON
	/// - `Schema` if the tag or `place_roots` is missing, not a list of
	///   strings, or empty
	pub fn load<P: AsRef<Path>>(data_dir: P, tag: &str) -> Result<Self> {
		let path = io::build_data_path(io::normalize_folder(data_dir), PLACE_PREFIX, tag);
		let record = Record::read(&path, tag)?;
		let roots = record.string_list("place_roots")?;

		debug!(path = %path.display(), tag, roots = roots.len(), "loaded place roots");
		Ok(Self { tag: tag.to_owned(), roots })
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn roots(&self) -> &[String] {
		&self.roots
	}

	pub fn len(&self) -> usize {
		self.roots.len()
	}

	/// Always `false`; kept for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}
}

/// Male and female first names for one type tag.
///
/// # Invariants
/// - Both lists hold at least one entry
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NameLists {
	tag: String,
	male: Vec<String>,
	female: Vec<String>,
}

impl NameLists {
	/// Creates name lists from in-memory vectors.
	///
	/// # Errors
	/// Returns an error if either list is empty.
	pub fn new(tag: &str, male: Vec<String>, female: Vec<String>) -> std::result::Result<Self, String> {
		if male.is_empty() || female.is_empty() {
			return Err("male/female lists must be non-empty".to_owned());
		}
		Ok(Self { tag: tag.to_owned(), male, female })
	}

	/// Loads the `male` and `female` lists of `tag` from `<data_dir>/name_<tag>.json`.
	///
	/// # Errors
	/// Same taxonomy as `PlaceRootSet::load`, with `male` or `female` as the
	/// offending field.
	pub fn load<P: AsRef<Path>>(data_dir: P, tag: &str) -> Result<Self> {
		let path = io::build_data_path(io::normalize_folder(data_dir), NAME_PREFIX, tag);
		let record = Record::read(&path, tag)?;
		let male = record.string_list("male")?;
		let female = record.string_list("female")?;

		debug!(path = %path.display(), tag, male = male.len(), female = female.len(), "loaded name lists");
		Ok(Self { tag: tag.to_owned(), male, female })
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn male(&self) -> &[String] {
		&self.male
	}

	pub fn female(&self) -> &[String] {
		&self.female
	}
}

/// Returns the type tags that have a place-root document in `data_dir`.
///
/// The result is sorted and free of duplicates. Name documents are not
/// checked; a tag listed here may still fail to load its names.
pub fn available_types<P: AsRef<Path>>(data_dir: P) -> Result<Vec<String>> {
	let folder = io::normalize_folder(data_dir);
	let prefix = format!("{PLACE_PREFIX}_");

	let mut tags: Vec<String> = io::list_files(&folder, "json")?
		.into_iter()
		.filter_map(|file| io::get_filename(&file).ok())
		.filter_map(|stem| stem.strip_prefix(&prefix).map(str::to_owned))
		.filter(|tag| !tag.is_empty())
		.collect();

	tags.sort();
	tags.dedup();
	Ok(tags)
}

/// The record stored under one type tag, still untyped.
struct Record {
	path: PathBuf,
	fields: Map<String, Value>,
}

impl Record {
	/// Reads `path`, parses it and extracts the record keyed by `tag`.
	fn read(path: &Path, tag: &str) -> Result<Self> {
		let contents = io::read_document(path)?;
		let document: Value = serde_json::from_str(&contents)
			.map_err(|source| GeneratorError::Format { path: path.to_path_buf(), source })?;

		let schema = |reason: &str| GeneratorError::Schema {
			path: path.to_path_buf(),
			field: tag.to_owned(),
			reason: reason.to_owned(),
		};

		let mut document = match document {
			Value::Object(map) => map,
			_ => return Err(schema("cannot be looked up: document is not a mapping of type tags")),
		};

		match document.remove(tag) {
			Some(Value::Object(fields)) => Ok(Self { path: path.to_path_buf(), fields }),
			Some(_) => Err(schema("must be a mapping")),
			None => Err(schema("is missing")),
		}
	}

	/// Validates `field` as a non-empty list of strings.
	fn string_list(&self, field: &str) -> Result<Vec<String>> {
		let schema = |reason: &str| GeneratorError::Schema {
			path: self.path.clone(),
			field: field.to_owned(),
			reason: reason.to_owned(),
		};

		let items = match self.fields.get(field) {
			Some(Value::Array(items)) => items,
			Some(_) => return Err(schema("must be a list")),
			None => return Err(schema("is missing")),
		};

		if items.is_empty() {
			return Err(schema("must be a non-empty list"));
		}

		items
			.iter()
			.map(|item| item.as_str().map(str::to_owned))
			.collect::<Option<Vec<_>>>()
			.ok_or_else(|| schema("must contain only strings"))
	}
}
