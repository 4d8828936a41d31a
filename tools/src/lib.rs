//! Data tooling for the prediction tables: validation reports shared by the
//! `compile_tables` and `show_table_entry` binaries.

pub mod audit;

pub use audit::{audit, TableReport};
