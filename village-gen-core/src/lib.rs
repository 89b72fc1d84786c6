//! Fantasy village and resident name generation library.
//!
//! This crate provides:
//! - Loading of place roots and resident names from tagged JSON documents
//! - Village names composed from random roots, with light cleanup
//! - Resident lists that stay as varied as the data allows
//! - Reproducible output through an explicit, seedable random stream
//! - Text, JSON and CSV rendering of the result
//!
//! File handling helpers are kept internal.

/// Error taxonomy shared by every fallible operation.
pub mod error;

/// Generation models: data, cleanup, selection and the generator itself.
pub mod model;

/// Rendering of generated bundles (text, JSON, CSV).
pub mod render;

/// I/O utilities (document reads, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{GeneratorError, Result};
pub use model::bundle::{GeneratedBundle, PlaceName, Residents};
pub use model::config::GenerationConfig;
pub use model::data::{NameLists, PlaceRootSet, available_types};
pub use model::generator::{Generator, generate};
pub use render::OutputFormat;
