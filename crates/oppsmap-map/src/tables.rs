//! Per-source rename declarations.
//!
//! The vendor spellings below come from the published HCPCS quarterly file
//! and the CMS OPPS Addendum A/B spreadsheets; canonical names are the
//! underscore forms the engine joins on.

use oppsmap_model::SourceKind;

use crate::rename::RenameTable;

const HCPCS_RENAMES: &[(&str, &str)] = &[
    ("LONG DESCRIPTION", "LONG_DESCRIPTION"),
    ("SHORT DESCRIPTION", "SHORT_DESCRIPTION"),
];

const ADDENDUM_A_RENAMES: &[(&str, &str)] = &[
    ("Group Title", "Group_Title"),
    ("Relative Weight", "Relative_Weight"),
    ("Payment Rate", "Payment_Rate"),
    ("National Unadjusted Copayment", "National_Unadjusted_Copayment"),
    ("Minimum Unadjusted Copayment", "Minimum_Unadjusted_Copayment"),
    ("IRA Coinsurance percentage", "IRA_Coinsurance_Percentage"),
    (
        "Adjusted Beneficiary Copayment",
        "Adjusted_Beneficiary_Copayment",
    ),
    (
        "Drug and Device Pass-Through Expiration during Calendar Year",
        "Drug_and_Device_Pass-Through_Expiration",
    ),
];

const ADDENDUM_B_RENAMES: &[(&str, &str)] = &[
    ("HCPCS Code", "HCPCS_Code"),
    ("Short Descriptor", "Short_Descriptor"),
    ("Relative Weight", "Relative_Weight"),
    ("Payment Rate", "Payment_Rate"),
    ("National Unadjusted Copayment", "National_Unadjusted_Copayment"),
    ("Minimum Unadjusted Copayment", "Minimum_Unadjusted_Copayment"),
    (
        "Drug and Device Pass-Through Expiration during Calendar Year",
        "Drug_and_Device_Pass-Through_Expiration",
    ),
];

/// The declared rename table for a source kind.
pub fn rename_table(kind: SourceKind) -> RenameTable {
    match kind {
        SourceKind::Hcpcs => RenameTable::from_pairs(HCPCS_RENAMES),
        SourceKind::AddendumA => RenameTable::from_pairs(ADDENDUM_A_RENAMES),
        SourceKind::AddendumB => RenameTable::from_pairs(ADDENDUM_B_RENAMES),
        SourceKind::Concepts => RenameTable::default(),
    }
}
