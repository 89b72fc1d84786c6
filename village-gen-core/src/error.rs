use std::path::PathBuf;

use thiserror::Error;

/// Every way a generation call can fail.
///
/// No variant is recoverable inside the core: the caller gets the error
/// and no partial bundle.
#[derive(Error, Debug)]
pub enum GeneratorError {
	/// The backing data document does not exist.
	#[error("File not found: {}", path.display())]
	NotFound { path: PathBuf },

	/// The document exists but is not valid JSON.
	#[error("Invalid JSON in {}", path.display())]
	Format {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// The document parses but does not have the required shape.
	#[error("Invalid data in {}: field '{field}' {reason}", path.display())]
	Schema {
		path: PathBuf,
		field: String,
		reason: String,
	},

	/// Root range or requested count cannot be satisfied.
	#[error("Range error: {0}")]
	Range(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
