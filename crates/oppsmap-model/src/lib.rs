pub mod concept;
pub mod error;
pub mod record;
pub mod schema;
pub mod source;

pub use concept::{Concept, ConceptCatalog};
pub use error::{MapperError, Result};
pub use record::{AddendumARecord, AddendumBRecord, ProcedureRecord};
pub use schema::SchemaReport;
pub use source::SourceKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_serializes_with_wire_field_names() {
        let mut concept = Concept::new("J20.9", "Acute bronchitis");
        concept.hcpcs_mappings.push(ProcedureRecord {
            seqnum: "J20.9".to_string(),
            hcpc: "A0428".to_string(),
            opps: "APC100".to_string(),
            ..ProcedureRecord::default()
        });
        let json = serde_json::to_value(&concept).expect("serialize concept");
        assert_eq!(json["code"], "J20.9");
        assert!(json["HCPCS_Mappings"].is_array());
        assert!(json["Addendum_A_Mappings"].as_array().unwrap().is_empty());
        assert!(json["Addendum_B_Mappings"].as_array().unwrap().is_empty());
        assert_eq!(json["HCPCS_Mappings"][0]["SEQNUM"], "J20.9");
    }

    #[test]
    fn catalog_preserves_unknown_fields() {
        let raw = r#"{
            "resourceType": "CodeSystem",
            "concept": [
                {"code": "A00", "display": "Cholera", "definition": "infection"}
            ]
        }"#;
        let catalog: ConceptCatalog = serde_json::from_str(raw).expect("parse catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.concept[0].code, "A00");
        assert_eq!(
            catalog.concept[0].extra.get("definition").unwrap(),
            "infection"
        );
        assert_eq!(catalog.extra.get("resourceType").unwrap(), "CodeSystem");
        assert!(catalog.concept[0].hcpcs_mappings.is_empty());
    }

    #[test]
    fn source_kind_constants() {
        assert_eq!(SourceKind::Hcpcs.skip_rows(), 0);
        assert_eq!(SourceKind::AddendumA.skip_rows(), 2);
        assert_eq!(SourceKind::AddendumB.skip_rows(), 4);
        assert!(
            SourceKind::Hcpcs
                .required_columns()
                .contains(&"SEQNUM")
        );
        assert!(SourceKind::AddendumA.required_columns().contains(&"APC"));
    }

    #[test]
    fn schema_report_column_lookup() {
        let report = SchemaReport {
            source: SourceKind::Hcpcs,
            missing: vec!["OPPS".to_string()],
        };
        assert!(!report.is_clean());
        assert!(!report.has_column("OPPS"));
        assert!(report.has_column("SEQNUM"));
    }
}
