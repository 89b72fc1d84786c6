use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::{GeneratorError, Result};
use crate::model::bundle::{GeneratedBundle, PlaceName, Residents, resident_of};
use crate::model::config::GenerationConfig;
use crate::model::data::{NameLists, PlaceRootSet};
use crate::model::picker::pick;
use crate::model::tidy::tidy;

/// Village and resident generator bound to one configuration.
///
/// # Responsibilities
/// - Own the loaded word lists for the configured type tags
/// - Own the random stream, seeded once at construction
/// - Compose village names from roots and fill resident lists
///
/// # Invariants
/// - `1 <= min_roots <= max_roots <= places.len()`
/// - The random stream is never shared: two generators built from the same
///   seeded config produce the same sequence of results
#[derive(Debug)]
pub struct Generator {
	config: GenerationConfig,
	places: PlaceRootSet,
	names: NameLists,
	rng: ChaCha8Rng,
}

impl Generator {
	/// Creates a generator by loading both documents from `config.data_dir`.
	///
	/// # Errors
	/// - `Range` if the root range is invalid or larger than the root set
	/// - `NotFound`, `Format` or `Schema` if a document cannot be loaded
	pub fn new(config: GenerationConfig) -> Result<Self> {
		config.validate()?;
		let places = PlaceRootSet::load(&config.data_dir, &config.place_type)?;
		let names = NameLists::load(&config.data_dir, &config.name_type)?;
		Self::from_data(config, places, names)
	}

	/// Creates a generator over word lists that are already in memory.
	///
	/// # Errors
	/// Returns `Range` if the root range is invalid or `max_roots` exceeds
	/// the number of distinct roots.
	pub fn from_data(config: GenerationConfig, places: PlaceRootSet, names: NameLists) -> Result<Self> {
		config.validate()?;
		if config.max_roots > places.len() {
			return Err(GeneratorError::Range(format!(
				"max_roots ({}) exceeds the {} root(s) available for type '{}'",
				config.max_roots,
				places.len(),
				places.tag()
			)));
		}

		let rng = match config.seed {
			Some(seed) => ChaCha8Rng::seed_from_u64(seed),
			None => ChaCha8Rng::from_rng(&mut rand::rng()),
		};

		Ok(Self { config, places, names, rng })
	}

	/// Returns the configuration this generator was built with.
	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Draws a village name.
	///
	/// The root count is uniform in `[min_roots, max_roots]`; the roots are
	/// distinct, concatenated in draw order, then tidied.
	pub fn generate_place(&mut self) -> Result<PlaceName> {
		let count = self.rng.random_range(self.config.min_roots..=self.config.max_roots);
		let roots = pick(self.places.roots(), count, &mut self.rng)?;
		let name = tidy(&roots.concat());

		debug!(count, ?roots, %name, "composed village name");
		Ok(PlaceName { name, roots })
	}

	/// Draws the configured number of male and female residents of `village`.
	///
	/// Both draws are independent; a name may appear in both lists if the
	/// data files share it.
	pub fn generate_residents(&mut self, village: &str) -> Result<Residents> {
		let male = pick(self.names.male(), self.config.num_male, &mut self.rng)?;
		let female = pick(self.names.female(), self.config.num_female, &mut self.rng)?;

		Ok(Residents {
			male: male.iter().map(|m| resident_of(m, village)).collect(),
			female: female.iter().map(|f| resident_of(f, village)).collect(),
		})
	}

	/// Generates a full bundle: one village and its residents.
	///
	/// Successive calls continue the same random stream.
	pub fn generate(&mut self) -> Result<GeneratedBundle> {
		let village = self.generate_place()?.name;
		let residents = self.generate_residents(&village)?;

		info!(%village, residents = residents.len(), "generated bundle");
		Ok(GeneratedBundle { village, residents })
	}
}

/// Loads the data for `config` and generates a single bundle.
///
/// # Errors
/// Any error of `Generator::new` or `Generator::generate`.
pub fn generate(config: GenerationConfig) -> Result<GeneratedBundle> {
	Generator::new(config)?.generate()
}
