//! Diagnosis concepts and the catalog document that carries them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{AddendumARecord, AddendumBRecord, ProcedureRecord};

/// A diagnosis entry from the ICD-10 concept catalog.
///
/// The three mapping lists are empty until the engine enriches the concept,
/// and remain empty (never absent) when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub display: String,
    #[serde(rename = "HCPCS_Mappings", default)]
    pub hcpcs_mappings: Vec<ProcedureRecord>,
    #[serde(rename = "Addendum_A_Mappings", default)]
    pub addendum_a_mappings: Vec<AddendumARecord>,
    #[serde(rename = "Addendum_B_Mappings", default)]
    pub addendum_b_mappings: Vec<AddendumBRecord>,
    /// Catalog fields outside the canonical set, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Concept {
    pub fn new(code: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: display.into(),
            ..Self::default()
        }
    }

    /// True once any of the three mapping lists holds a record.
    pub fn has_mappings(&self) -> bool {
        !self.hcpcs_mappings.is_empty()
            || !self.addendum_a_mappings.is_empty()
            || !self.addendum_b_mappings.is_empty()
    }
}

/// The concept catalog document: a top-level `concept` list plus whatever
/// other top-level fields the source carries (resource type, version, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptCatalog {
    pub concept: Vec<Concept>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ConceptCatalog {
    pub fn len(&self) -> usize {
        self.concept.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concept.is_empty()
    }
}
