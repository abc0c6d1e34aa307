//! Writes mapped rows into a relational staging table.
//!
//! One connection per batch, one parameterized insert per row, exactly one
//! commit after the row loop. The [`StagingSink`] trait keeps the database
//! driver swappable; [`SqliteSink`] is the shipped backend.

pub mod config;
pub mod error;
pub mod sink;
pub mod sqlite;
pub mod writer;

pub use config::SinkConfig;
pub use error::{Result, SinkError};
pub use sink::StagingSink;
pub use sqlite::SqliteSink;
pub use writer::{ImportReport, RowFailure, write_rows};
