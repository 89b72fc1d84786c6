use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// Parameters of one generation call.
///
/// `GenerationConfig` is a plain value: build it, hand it to
/// `Generator::new`, and it is not looked at again except for the counts.
///
/// # Invariants (checked by `validate`)
/// - `min_roots >= 1`
/// - `min_roots <= max_roots`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
	/// Type tag of the place-root document (`plname_<tag>.json`).
	pub place_type: String,

	/// Type tag of the name document (`name_<tag>.json`).
	pub name_type: String,

	/// Number of male residents to generate.
	pub num_male: usize,

	/// Number of female residents to generate.
	pub num_female: usize,

	/// Minimum number of roots in a village name (inclusive).
	pub min_roots: usize,

	/// Maximum number of roots in a village name (inclusive).
	pub max_roots: usize,

	/// Seed of the random stream. `None` draws from OS entropy.
	pub seed: Option<u64>,

	/// Directory holding the data documents.
	pub data_dir: PathBuf,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			place_type: "default".to_owned(),
			name_type: "default".to_owned(),
			num_male: 5,
			num_female: 5,
			min_roots: 2,
			max_roots: 3,
			seed: None,
			data_dir: PathBuf::from("."),
		}
	}
}

impl GenerationConfig {
	/// Checks the root range on its own, before any data is loaded.
	///
	/// The upper bound against the available roots is checked by the
	/// generator once the roots are known.
	///
	/// # Errors
	/// Returns `GeneratorError::Range` if the range is empty or starts at 0.
	pub fn validate(&self) -> Result<()> {
		if self.min_roots < 1 {
			return Err(GeneratorError::Range(format!("min_roots must be >= 1, got {}", self.min_roots)));
		}
		if self.min_roots > self.max_roots {
			return Err(GeneratorError::Range(format!(
				"min_roots ({}) must not exceed max_roots ({})",
				self.min_roots, self.max_roots
			)));
		}
		Ok(())
	}
}
