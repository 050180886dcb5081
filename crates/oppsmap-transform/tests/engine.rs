use oppsmap_map::{AddendumATable, AddendumBTable, ProcedureTable};
use oppsmap_model::{AddendumARecord, AddendumBRecord, Concept, ConceptCatalog, ProcedureRecord};
use oppsmap_transform::map_concepts;

fn procedure(seqnum: &str, hcpc: &str, opps: &str) -> ProcedureRecord {
    ProcedureRecord {
        seqnum: seqnum.to_string(),
        hcpc: hcpc.to_string(),
        opps: opps.to_string(),
        ..ProcedureRecord::default()
    }
}

fn procedures(records: Vec<ProcedureRecord>) -> ProcedureTable {
    ProcedureTable {
        records,
        has_seqnum: true,
        has_hcpc: true,
        has_opps: true,
    }
}

fn rate_a(apc: &str, payment_rate: &str) -> AddendumARecord {
    AddendumARecord {
        apc: apc.to_string(),
        payment_rate: payment_rate.to_string(),
        ..AddendumARecord::default()
    }
}

fn addendum_a(records: Vec<AddendumARecord>) -> AddendumATable {
    AddendumATable {
        records,
        has_apc: true,
    }
}

fn rate_b(hcpcs_code: &str) -> AddendumBRecord {
    AddendumBRecord {
        hcpcs_code: hcpcs_code.to_string(),
        ..AddendumBRecord::default()
    }
}

fn addendum_b(records: Vec<AddendumBRecord>) -> AddendumBTable {
    AddendumBTable {
        records,
        has_hcpcs_code: true,
    }
}

fn catalog(concepts: &[(&str, &str)]) -> ConceptCatalog {
    ConceptCatalog {
        concept: concepts
            .iter()
            .map(|(code, display)| Concept::new(*code, *display))
            .collect(),
        extra: Default::default(),
    }
}

#[test]
fn worked_example_maps_through_both_hops() {
    let procs = procedures(vec![procedure("J20.9", "A0428", "APC100")]);
    let a = addendum_a(vec![rate_a("APC100", "42.50")]);
    let b = addendum_b(vec![]);
    let mapped = map_concepts(catalog(&[("J20.9", "Acute bronchitis")]), &procs, &a, &b);

    let concept = &mapped.concept[0];
    assert_eq!(concept.hcpcs_mappings, vec![procedure("J20.9", "A0428", "APC100")]);
    assert_eq!(concept.addendum_a_mappings, vec![rate_a("APC100", "42.50")]);
    assert!(concept.addendum_b_mappings.is_empty());
}

#[test]
fn unmatched_concept_yields_three_empty_lists() {
    let procs = procedures(vec![procedure("J20.9", "A0428", "APC100")]);
    let mapped = map_concepts(
        catalog(&[("Z99", "No such mapping")]),
        &procs,
        &addendum_a(vec![rate_a("APC100", "42.50")]),
        &addendum_b(vec![rate_b("A0428")]),
    );
    let concept = &mapped.concept[0];
    assert!(concept.hcpcs_mappings.is_empty());
    assert!(concept.addendum_a_mappings.is_empty());
    assert!(concept.addendum_b_mappings.is_empty());
}

#[test]
fn matching_is_exact_and_case_sensitive() {
    let procs = procedures(vec![
        procedure("J20.9", "A0428", "0100"),
        procedure("j20.9", "A0429", "0101"),
        procedure("J20.90", "A0430", "0102"),
    ]);
    let mapped = map_concepts(
        catalog(&[("J20.9", "Acute bronchitis")]),
        &procs,
        &addendum_a(vec![]),
        &addendum_b(vec![]),
    );
    let concept = &mapped.concept[0];
    assert_eq!(concept.hcpcs_mappings.len(), 1);
    assert_eq!(concept.hcpcs_mappings[0].hcpc, "A0428");
}

#[test]
fn addendum_matches_follow_table_order_and_dedupe_keys() {
    // Two procedures share an OPPS value; the addendum row must appear once,
    // and results come back in addendum row order regardless of key order.
    let procs = procedures(vec![
        procedure("C10", "H2", "0200"),
        procedure("C10", "H1", "0100"),
        procedure("C10", "H3", "0200"),
    ]);
    let a = addendum_a(vec![
        rate_a("0100", "10.00"),
        rate_a("0200", "20.00"),
        rate_a("0300", "30.00"),
    ]);
    let b = addendum_b(vec![rate_b("H3"), rate_b("H1"), rate_b("H9")]);
    let mapped = map_concepts(catalog(&[("C10", "test")]), &procs, &a, &b);

    let concept = &mapped.concept[0];
    assert_eq!(
        concept.addendum_a_mappings,
        vec![rate_a("0100", "10.00"), rate_a("0200", "20.00")]
    );
    assert_eq!(concept.addendum_b_mappings, vec![rate_b("H3"), rate_b("H1")]);
}

#[test]
fn missing_opps_column_empties_addendum_a_only() {
    let procs = ProcedureTable {
        records: vec![procedure("C10", "H1", "")],
        has_seqnum: true,
        has_hcpc: true,
        has_opps: false,
    };
    let a = addendum_a(vec![rate_a("", "1.00")]);
    let b = addendum_b(vec![rate_b("H1")]);
    let mapped = map_concepts(catalog(&[("C10", "test")]), &procs, &a, &b);

    let concept = &mapped.concept[0];
    assert_eq!(concept.hcpcs_mappings.len(), 1);
    assert!(concept.addendum_a_mappings.is_empty());
    assert_eq!(concept.addendum_b_mappings, vec![rate_b("H1")]);
}

#[test]
fn missing_seqnum_column_empties_everything() {
    let procs = ProcedureTable {
        records: vec![procedure("C10", "H1", "0100")],
        has_seqnum: false,
        has_hcpc: true,
        has_opps: true,
    };
    let mapped = map_concepts(
        catalog(&[("C10", "test")]),
        &procs,
        &addendum_a(vec![rate_a("0100", "1.00")]),
        &addendum_b(vec![rate_b("H1")]),
    );
    let concept = &mapped.concept[0];
    assert!(concept.hcpcs_mappings.is_empty());
    assert!(concept.addendum_a_mappings.is_empty());
    assert!(concept.addendum_b_mappings.is_empty());
}

#[test]
fn missing_rate_key_column_empties_that_hop() {
    let procs = procedures(vec![procedure("C10", "H1", "0100")]);
    let a = AddendumATable {
        records: vec![rate_a("0100", "1.00")],
        has_apc: false,
    };
    let mapped = map_concepts(
        catalog(&[("C10", "test")]),
        &procs,
        &a,
        &addendum_b(vec![rate_b("H1")]),
    );
    let concept = &mapped.concept[0];
    assert!(concept.addendum_a_mappings.is_empty());
    assert_eq!(concept.addendum_b_mappings.len(), 1);
}

#[test]
fn concept_order_is_preserved() {
    let codes = ["Z03", "A01", "M99", "A01", "B20"];
    let concepts: Vec<(&str, &str)> = codes.iter().map(|code| (*code, "display")).collect();
    let mapped = map_concepts(
        catalog(&concepts),
        &procedures(vec![procedure("A01", "H1", "0100")]),
        &addendum_a(vec![]),
        &addendum_b(vec![]),
    );
    let out: Vec<&str> = mapped.concept.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(out, codes);
}

#[test]
fn attached_records_equal_source_rows() {
    let source = procedure("C10", "H1", "0100");
    let procs = procedures(vec![source.clone()]);
    let mapped = map_concepts(
        catalog(&[("C10", "test"), ("C10", "again")]),
        &procs,
        &addendum_a(vec![]),
        &addendum_b(vec![]),
    );
    for concept in &mapped.concept {
        assert_eq!(concept.hcpcs_mappings, vec![source.clone()]);
    }
    // source table untouched
    assert_eq!(procs.records[0], source);
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    fn code_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["A00", "B11", "C22", "D33", "E44"])
            .prop_map(ToString::to_string)
    }

    proptest! {
        #[test]
        fn seqnum_membership_is_exact(
            concept_codes in prop::collection::vec(code_strategy(), 0..8),
            proc_codes in prop::collection::vec(code_strategy(), 0..16),
        ) {
            let records: Vec<ProcedureRecord> = proc_codes
                .iter()
                .enumerate()
                .map(|(idx, code)| procedure(code, &format!("H{idx}"), &format!("{idx:04}")))
                .collect();
            let procs = procedures(records.clone());
            let concepts: Vec<(&str, &str)> = concept_codes
                .iter()
                .map(|code| (code.as_str(), "display"))
                .collect();
            let mapped = map_concepts(
                catalog(&concepts),
                &procs,
                &addendum_a(vec![]),
                &addendum_b(vec![]),
            );

            // Order preserved.
            let out: Vec<&str> = mapped.concept.iter().map(|c| c.code.as_str()).collect();
            prop_assert_eq!(out, concept_codes.iter().map(String::as_str).collect::<Vec<_>>());

            // Every mapping list is exactly the SEQNUM-equal rows, in row order.
            for concept in &mapped.concept {
                let expected: Vec<ProcedureRecord> = records
                    .iter()
                    .filter(|record| record.seqnum == concept.code)
                    .cloned()
                    .collect();
                prop_assert_eq!(&concept.hcpcs_mappings, &expected);
            }
        }
    }
}
