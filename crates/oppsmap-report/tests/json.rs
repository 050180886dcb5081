use std::fs;

use tempfile::TempDir;

use oppsmap_model::{Concept, ConceptCatalog, ProcedureRecord};
use oppsmap_report::{to_pretty_json, write_mapped_catalog};

fn sample_catalog() -> ConceptCatalog {
    let mut concept = Concept::new("J20.9", "Acute bronchitis");
    concept.hcpcs_mappings.push(ProcedureRecord {
        seqnum: "J20.9".to_string(),
        hcpc: "A0428".to_string(),
        opps: "APC100".to_string(),
        ..ProcedureRecord::default()
    });
    ConceptCatalog {
        concept: vec![concept, Concept::new("Z99", "Unmatched")],
        extra: Default::default(),
    }
}

#[test]
fn writes_catalog_and_reads_back() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("mapped.json");
    let catalog = sample_catalog();

    let written = write_mapped_catalog(&path, &catalog).expect("write catalog");
    assert_eq!(written, path);

    let round: ConceptCatalog =
        serde_json::from_str(&fs::read_to_string(&path).expect("read back")).expect("parse");
    assert_eq!(round, catalog);
    // Empty lists are present in the document, not absent.
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read back")).expect("parse");
    assert!(raw["concept"][1]["HCPCS_Mappings"].is_array());
}

#[test]
fn leaves_no_temp_file_behind() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("mapped.json");
    write_mapped_catalog(&path, &sample_catalog()).expect("write catalog");

    let names: Vec<String> = fs::read_dir(dir.path())
        .expect("list dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["mapped.json"]);
}

#[test]
fn serialization_is_deterministic() {
    let catalog = sample_catalog();
    let first = to_pretty_json(&catalog).expect("serialize");
    let second = to_pretty_json(&catalog).expect("serialize");
    assert_eq!(first, second);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("out").join("mapped.json");
    write_mapped_catalog(&path, &sample_catalog()).expect("write catalog");
    assert!(path.exists());
}
