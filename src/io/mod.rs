//! IO utilities for numeric tables and fitted statistics.

pub mod statistics;
pub mod table;

pub use statistics::{load_statistics, save_statistics};
pub use table::{read_csv, read_table, write_table, Table, TableReaderConfig};
