//! Sink configuration, validated before any connection is opened.

use std::path::PathBuf;

use crate::error::{Result, SinkError};

/// Default staging table name.
pub const DEFAULT_TABLE: &str = "temp_import";

/// Destination configuration for one batch.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Database file the batch is written to.
    pub database: PathBuf,
    /// Staging table receiving the rows. Must be a plain identifier; the
    /// table name is interpolated into the insert statement, placeholders
    /// cover only the values.
    pub table: String,
}

impl SinkConfig {
    #[must_use]
    pub fn new(database: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
        }
    }

    /// Check the configuration before use.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier_like(&self.table) {
            return Err(SinkError::InvalidTable {
                name: self.table.clone(),
            });
        }
        Ok(())
    }
}

fn is_identifier_like(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
