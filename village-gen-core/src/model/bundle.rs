use serde::{Deserialize, Serialize};

/// A village name and the roots it was built from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlaceName {
	/// Tidied, capitalized name.
	pub name: String,

	/// Roots in draw order, before concatenation and tidying.
	pub roots: Vec<String>,
}

/// Formatted residents of a village, males and females kept apart.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Residents {
	pub male: Vec<String>,
	pub female: Vec<String>,
}

impl Residents {
	/// Iterates over `(gender, resident)` pairs, males first.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.male
			.iter()
			.map(|m| ("male", m.as_str()))
			.chain(self.female.iter().map(|f| ("female", f.as_str())))
	}

	pub fn len(&self) -> usize {
		self.male.len() + self.female.len()
	}

	pub fn is_empty(&self) -> bool {
		self.male.is_empty() && self.female.is_empty()
	}
}

/// Output of one generation call.
///
/// Serializes as `{"village": ..., "residents": {"male": [...], "female": [...]}}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratedBundle {
	pub village: String,
	pub residents: Residents,
}

/// Formats a resident as `"<name> of <village>"`.
pub fn resident_of(name: &str, village: &str) -> String {
	format!("{name} of {village}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn residents_iterate_males_first() {
		let residents = Residents {
			male: vec!["Tom of Ravenford".to_owned()],
			female: vec!["Ann of Ravenford".to_owned(), "Liv of Ravenford".to_owned()],
		};

		let pairs: Vec<_> = residents.iter().collect();
		assert_eq!(
			pairs,
			[("male", "Tom of Ravenford"), ("female", "Ann of Ravenford"), ("female", "Liv of Ravenford")]
		);
		assert_eq!(residents.len(), 3);
	}

	#[test]
	fn resident_format() {
		assert_eq!(resident_of("Tom", "Enwood"), "Tom of Enwood");
	}
}
