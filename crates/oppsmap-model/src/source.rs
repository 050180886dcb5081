//! Source-kind metadata: banner-row constants and required canonical columns.

use serde::{Deserialize, Serialize};

/// The four known source shapes fed into the reconciliation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// HCPCS procedure catalog (delimited).
    Hcpcs,
    /// OPPS Addendum A fee-schedule table (delimited, 2 banner rows).
    AddendumA,
    /// OPPS Addendum B fee-schedule table (delimited, 4 banner rows).
    AddendumB,
    /// ICD-10 concept catalog (hierarchical JSON).
    Concepts,
}

impl SourceKind {
    /// The tabular sources, in pipeline order.
    pub const TABULAR: [SourceKind; 3] =
        [SourceKind::Hcpcs, SourceKind::AddendumA, SourceKind::AddendumB];

    /// Human-readable label used in logs and summaries.
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Hcpcs => "HCPCS catalog",
            SourceKind::AddendumA => "Addendum A",
            SourceKind::AddendumB => "Addendum B",
            SourceKind::Concepts => "ICD-10 concepts",
        }
    }

    /// Number of leading non-data rows to skip before the header row.
    ///
    /// These are fixed per source shape, never inferred from content.
    pub fn skip_rows(self) -> usize {
        match self {
            SourceKind::Hcpcs | SourceKind::Concepts => 0,
            SourceKind::AddendumA => 2,
            SourceKind::AddendumB => 4,
        }
    }

    /// Canonical columns the engine expects after normalization.
    ///
    /// A source lacking one of these still processes; the lookups that
    /// depend on the column yield no matches.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            SourceKind::Hcpcs => &[
                "SEQNUM",
                "HCPC",
                "OPPS",
                "LONG_DESCRIPTION",
                "SHORT_DESCRIPTION",
            ],
            SourceKind::AddendumA => &["APC", "Group_Title", "Relative_Weight", "Payment_Rate"],
            SourceKind::AddendumB => &[
                "HCPCS_Code",
                "Short_Descriptor",
                "Relative_Weight",
                "Payment_Rate",
            ],
            SourceKind::Concepts => &["code", "display"],
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
