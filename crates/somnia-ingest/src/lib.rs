//! CSV ingestion for the staging importer.
//!
//! The loader reads the whole file into memory before any downstream work
//! starts: headers from the first row, every data row as raw string cells.

pub mod error;
pub mod table;

pub use error::{IngestError, Result};
pub use table::{SourceTable, read_source_table};
