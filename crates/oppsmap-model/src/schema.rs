//! Schema-mismatch reporting.

use serde::{Deserialize, Serialize};

use crate::source::SourceKind;

/// Outcome of checking a normalized source against its required canonical
/// columns. Missing columns are warnings: the run continues and any lookup
/// against a missing column finds no match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaReport {
    pub source: SourceKind,
    /// Required canonical columns absent after renaming, in declaration order.
    pub missing: Vec<String>,
}

impl SchemaReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    /// True when the named canonical column is present on this source.
    pub fn has_column(&self, canonical: &str) -> bool {
        !self.missing.iter().any(|name| name == canonical)
    }
}
