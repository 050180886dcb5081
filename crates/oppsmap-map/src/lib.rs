pub mod normalize;
pub mod records;
pub mod rename;
pub mod tables;

pub use normalize::{NormalizedTable, normalize};
pub use records::{
    AddendumATable, AddendumBTable, ProcedureTable, build_addendum_a_table,
    build_addendum_b_table, build_procedure_table,
};
pub use rename::RenameTable;
pub use tables::rename_table;
