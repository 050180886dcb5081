//! Concept catalog loading.
//!
//! The catalog is hierarchical JSON with a top-level `concept` list; each
//! element's `code` and `display` become a [`Concept`] with empty mapping
//! lists. Other fields at either level are preserved for the output.

use std::fs;
use std::path::Path;

use tracing::debug;

use oppsmap_model::{ConceptCatalog, MapperError, Result};

/// Read and parse the concept catalog document.
///
/// # Errors
///
/// [`MapperError::SourceUnavailable`] when the file is missing or
/// unreadable; [`MapperError::InvalidCatalog`] when it parses but lacks the
/// `concept` list or is not valid JSON.
pub fn read_concept_catalog(path: &Path) -> Result<ConceptCatalog> {
    let raw = fs::read_to_string(path).map_err(|error| MapperError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    let catalog: ConceptCatalog =
        serde_json::from_str(&raw).map_err(|error| MapperError::InvalidCatalog {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
    debug!(
        path = %path.display(),
        concepts = catalog.len(),
        "concept catalog loaded"
    );
    Ok(catalog)
}
