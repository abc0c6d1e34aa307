//! Configuration options for import processing.

use serde::{Deserialize, Serialize};

/// How a header that does not expose every expected source column is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnMode {
    /// Fail fast before any row is mapped, naming every absent column.
    Strict,
    /// Warn once per absent column and map the field to the null marker.
    #[default]
    Lenient,
}

/// How a failing insert is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailureMode {
    /// First failure propagates; the batch is never committed.
    #[default]
    Abort,
    /// Record the failure, continue, commit the surviving rows.
    Isolate,
}

/// Options controlling import behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Missing expected source columns: fail fast or null-fill with a warning.
    pub column_mode: ColumnMode,
    /// Failing inserts: abort the batch or isolate the row.
    pub failure_mode: FailureMode,
}

impl ImportOptions {
    /// Options with every strictness switch enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            column_mode: ColumnMode::Strict,
            failure_mode: FailureMode::Abort,
        }
    }
}
