use std::path::PathBuf;

#[derive(Debug)]
pub struct MapRunResult {
    /// Written output path; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub sources: Vec<SourceSummary>,
    pub concept_count: usize,
    pub matched_concepts: usize,
    pub procedure_links: usize,
    pub addendum_a_links: usize,
    pub addendum_b_links: usize,
    /// Schema warnings accumulated during normalization.
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct SourceSummary {
    pub label: &'static str,
    pub path: PathBuf,
    pub rows: usize,
    pub missing_columns: Vec<String>,
}
