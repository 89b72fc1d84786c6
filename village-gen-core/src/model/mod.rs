//! Top-level module for village and resident generation.
//!
//! This module provides:
//! - Loading and validation of the tagged word lists (`data`)
//! - The place-name cleanup transform (`tidy`)
//! - Varied selection from finite pools (`picker`)
//! - The generation parameters (`config`) and result values (`bundle`)
//! - The high-level generation interface (`generator`)

/// High-level interface turning a `GenerationConfig` into bundles.
///
/// Owns the word lists and the seeded random stream.
pub mod generator;

/// Generation parameters and their validation.
pub mod config;

/// Place roots and resident name lists, loaded from JSON documents keyed by
/// type tag.
pub mod data;

/// Result values: village name, captured roots and formatted residents.
pub mod bundle;

/// Selection of N items from a pool, distinct first, balanced reuse after.
pub mod picker;

/// Deterministic phonotactic cleanup of concatenated roots.
pub mod tidy;
