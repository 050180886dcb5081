use std::fs;

use tempfile::TempDir;

use oppsmap_ingest::read_concept_catalog;
use oppsmap_model::MapperError;

#[test]
fn reads_catalog_with_extra_fields() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("icd10.json");
    fs::write(
        &path,
        r#"{
            "resourceType": "CodeSystem",
            "version": "2025",
            "concept": [
                {"code": "J20.9", "display": "Acute bronchitis, unspecified"},
                {"code": "A00", "display": "Cholera", "definition": "infection"}
            ]
        }"#,
    )
    .expect("write catalog");

    let catalog = read_concept_catalog(&path).expect("read catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.concept[0].code, "J20.9");
    assert!(catalog.concept[0].hcpcs_mappings.is_empty());
    assert_eq!(catalog.extra.get("version").unwrap(), "2025");
}

#[test]
fn missing_concept_list_is_invalid_catalog() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"resourceType": "CodeSystem"}"#).expect("write catalog");
    let error = read_concept_catalog(&path).expect_err("no concept list");
    assert!(matches!(error, MapperError::InvalidCatalog { .. }));
}

#[test]
fn malformed_json_is_invalid_catalog() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").expect("write catalog");
    let error = read_concept_catalog(&path).expect_err("broken json");
    assert!(matches!(error, MapperError::InvalidCatalog { .. }));
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.json");
    let error = read_concept_catalog(&path).expect_err("missing file");
    assert!(matches!(error, MapperError::SourceUnavailable { .. }));
}
