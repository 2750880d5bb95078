//! JSON definition loading for patterns and swatch catalogs
//!
//! Reads the two data files the original configurator ships:
//! `calepinages.json` (pattern list) and `nuancier.json` (swatch catalog).
//! Fetching, caching and retries stay with the host; this module only maps
//! files on disk into validated core types.

use std::path::Path;

use crate::color::swatch::{Swatch, SwatchCatalog};
use crate::io::error::{ConfiguratorError, Result};
use crate::pattern::definition::{Pattern, PatternDefinition};

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConfiguratorError::DefinitionLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load raw pattern definition records from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// pattern records. Malformed selector values inside a record degrade to
/// fixed defaults rather than failing the file.
pub fn load_pattern_definitions(path: &Path) -> Result<Vec<PatternDefinition>> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| ConfiguratorError::DefinitionParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate patterns from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any record
/// violates a structural invariant (duplicate cells, empty block).
pub fn load_patterns(path: &Path) -> Result<Vec<Pattern>> {
    load_pattern_definitions(path)?
        .into_iter()
        .map(Pattern::from_definition)
        .collect()
}

/// Find a pattern by id in a loaded set
///
/// # Errors
///
/// Returns `UnknownPattern` if no pattern carries the requested id.
pub fn find_pattern<'a>(patterns: &'a [Pattern], id: &str) -> Result<&'a Pattern> {
    patterns
        .iter()
        .find(|pattern| pattern.id() == id)
        .ok_or_else(|| ConfiguratorError::UnknownPattern { id: id.to_string() })
}

/// Load a swatch catalog from a JSON file, preserving file order
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// swatch records.
pub fn load_swatches(path: &Path) -> Result<SwatchCatalog> {
    let contents = read_file(path)?;
    let swatches: Vec<Swatch> =
        serde_json::from_str(&contents).map_err(|e| ConfiguratorError::DefinitionParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(SwatchCatalog::new(swatches))
}
