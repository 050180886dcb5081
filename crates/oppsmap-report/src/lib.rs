//! Output serialization for the enriched concept catalog.
//!
//! The document mirrors the input catalog's top-level shape with each
//! concept carrying its three mapping lists. Publishing is all-or-nothing:
//! the serialized bytes go to a sibling `.tmp` file first and are renamed
//! into place, so a failure never leaves a partial output behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use oppsmap_model::{ConceptCatalog, MapperError, Result};

/// Serialize the catalog with 4-space indentation, matching the layout of
/// the upstream reference exports.
pub fn to_pretty_json(catalog: &ConceptCatalog) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    catalog
        .serialize(&mut serializer)
        .map_err(|error| MapperError::Serialization {
            path: PathBuf::from("<memory>"),
            reason: error.to_string(),
        })?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the enriched catalog to `path`, atomically.
///
/// # Errors
///
/// Returns [`MapperError::Serialization`] on any write or rename failure;
/// the temporary file is removed on the failure path.
pub fn write_mapped_catalog(path: &Path, catalog: &ConceptCatalog) -> Result<PathBuf> {
    let bytes = to_pretty_json(catalog).map_err(|error| match error {
        MapperError::Serialization { reason, .. } => MapperError::Serialization {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|error| MapperError::Serialization {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, &bytes).map_err(|error| {
        let _ = fs::remove_file(&tmp);
        MapperError::Serialization {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }
    })?;
    fs::rename(&tmp, path).map_err(|error| {
        let _ = fs::remove_file(&tmp);
        MapperError::Serialization {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }
    })?;

    info!(
        path = %path.display(),
        concepts = catalog.len(),
        bytes = bytes.len(),
        "mapped catalog written"
    );
    Ok(path.to_path_buf())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(
        || std::ffi::OsString::from("output"),
        std::ffi::OsStr::to_os_string,
    );
    name.push(".tmp");
    path.with_file_name(name)
}
