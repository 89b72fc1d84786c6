use std::fs;
use std::path::Path;

use tempfile::TempDir;
use village_gen_core::model::tidy::tidy;
use village_gen_core::{GenerationConfig, GeneratorError, Generator, OutputFormat, available_types, generate};

const ROOTS: [&str; 4] = ["rav", "en", "wood", "ford"];

fn data_dir(place_doc: &str, name_doc: &str) -> TempDir {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("plname_default.json"), place_doc).unwrap();
	fs::write(dir.path().join("name_default.json"), name_doc).unwrap();
	dir
}

fn scenario_dir() -> TempDir {
	data_dir(
		r#"{"default": {"place_roots": ["rav", "en", "wood", "ford"]}}"#,
		r#"{"default": {"male": ["Tom"], "female": ["Ann"]}}"#,
	)
}

fn scenario_config(dir: &Path) -> GenerationConfig {
	GenerationConfig {
		num_male: 1,
		num_female: 1,
		min_roots: 2,
		max_roots: 2,
		seed: Some(1),
		data_dir: dir.to_path_buf(),
		..GenerationConfig::default()
	}
}

#[test]
fn two_root_scenario() {
	let dir = scenario_dir();
	let bundle = generate(scenario_config(dir.path())).unwrap();

	let candidates: Vec<String> = ROOTS
		.iter()
		.flat_map(|a| ROOTS.iter().filter(move |b| *b != a).map(move |b| tidy(&format!("{a}{b}"))))
		.collect();
	assert!(candidates.contains(&bundle.village), "unexpected village {}", bundle.village);

	assert_eq!(bundle.residents.male, [format!("Tom of {}", bundle.village)]);
	assert_eq!(bundle.residents.female, [format!("Ann of {}", bundle.village)]);
}

#[test]
fn same_config_same_output() {
	let dir = scenario_dir();
	let a = generate(scenario_config(dir.path())).unwrap();
	let b = generate(scenario_config(dir.path())).unwrap();

	assert_eq!(OutputFormat::Json.render(&a).unwrap(), OutputFormat::Json.render(&b).unwrap());
	assert_eq!(OutputFormat::Csv.render(&a).unwrap(), OutputFormat::Csv.render(&b).unwrap());
}

#[test]
fn captured_roots_match_the_village() {
	let dir = scenario_dir();
	let mut generator = Generator::new(scenario_config(dir.path())).unwrap();

	for _ in 0..50 {
		let place = generator.generate_place().unwrap();
		assert_eq!(place.roots.len(), 2);
		assert!(place.roots.iter().all(|root| ROOTS.contains(&root.as_str())));
		assert_eq!(place.name, tidy(&place.roots.concat()));
	}
}

#[test]
fn missing_place_roots_produces_no_bundle() {
	let dir = data_dir(
		r#"{"default": {"roots": ["rav", "en"]}}"#,
		r#"{"default": {"male": ["Tom"], "female": ["Ann"]}}"#,
	);

	match generate(scenario_config(dir.path())) {
		Err(GeneratorError::Schema { field, .. }) => assert_eq!(field, "place_roots"),
		other => panic!("expected schema error, got {other:?}"),
	}
}

#[test]
fn missing_name_document_is_not_found() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("plname_default.json"), r#"{"default": {"place_roots": ["rav", "en"]}}"#).unwrap();

	let err = generate(scenario_config(dir.path())).unwrap_err();
	assert!(matches!(err, GeneratorError::NotFound { .. }), "{err}");
}

#[test]
fn too_few_roots_for_range() {
	let dir = data_dir(
		r#"{"default": {"place_roots": ["rav"]}}"#,
		r#"{"default": {"male": ["Tom"], "female": ["Ann"]}}"#,
	);

	let err = generate(scenario_config(dir.path())).unwrap_err();
	assert!(matches!(err, GeneratorError::Range(_)), "{err}");
}

#[test]
fn place_and_name_types_are_independent() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("plname_nordic.json"), r#"{"nordic": {"place_roots": ["fjord", "vik", "heim"]}}"#).unwrap();
	fs::write(dir.path().join("name_slavic.json"), r#"{"slavic": {"male": ["Bogdan"], "female": ["Milena"]}}"#).unwrap();

	let config = GenerationConfig {
		place_type: "nordic".to_owned(),
		name_type: "slavic".to_owned(),
		seed: Some(11),
		data_dir: dir.path().to_path_buf(),
		..GenerationConfig::default()
	};
	let bundle = generate(config).unwrap();

	assert_eq!(bundle.residents.male.len(), 5);
	assert!(bundle.residents.male.iter().all(|m| m.starts_with("Bogdan of ")));
	assert_eq!(available_types(dir.path()).unwrap(), ["nordic"]);
}
