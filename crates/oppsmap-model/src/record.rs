//! Canonical typed records for the three tabular sources.
//!
//! All values are text after normalization, numeric-looking cells included,
//! so equality comparisons behave identically across sources of mixed native
//! types. An absent value is the empty string, never a null marker. Columns
//! outside the canonical set ride along in `extra` and are preserved in the
//! output document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the HCPCS procedure catalog.
///
/// `seqnum` joins to a concept's `code`; `opps` and `hcpc` key into the
/// Addendum A and Addendum B tables respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    #[serde(rename = "SEQNUM", default)]
    pub seqnum: String,
    #[serde(rename = "HCPC", default)]
    pub hcpc: String,
    #[serde(rename = "OPPS", default)]
    pub opps: String,
    #[serde(rename = "LONG_DESCRIPTION", default)]
    pub long_description: String,
    #[serde(rename = "SHORT_DESCRIPTION", default)]
    pub short_description: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// One row of the OPPS Addendum A fee-schedule table, keyed by `apc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddendumARecord {
    #[serde(rename = "APC", default)]
    pub apc: String,
    #[serde(rename = "Group_Title", default)]
    pub group_title: String,
    #[serde(rename = "Relative_Weight", default)]
    pub relative_weight: String,
    #[serde(rename = "Payment_Rate", default)]
    pub payment_rate: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// One row of the OPPS Addendum B fee-schedule table, keyed by `hcpcs_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddendumBRecord {
    #[serde(rename = "HCPCS_Code", default)]
    pub hcpcs_code: String,
    #[serde(rename = "Short_Descriptor", default)]
    pub short_descriptor: String,
    #[serde(rename = "Relative_Weight", default)]
    pub relative_weight: String,
    #[serde(rename = "Payment_Rate", default)]
    pub payment_rate: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}
