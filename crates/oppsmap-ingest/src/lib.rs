pub mod concepts;
pub mod csv_table;

pub use concepts::read_concept_catalog;
pub use csv_table::{CsvTable, read_csv_table};
