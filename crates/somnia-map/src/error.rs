//! Error types for mapping operations.

use std::fmt;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Expected source columns not present in the file header (strict mode).
    MissingColumns { columns: Vec<String> },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns { columns } => {
                write!(f, "expected source columns not found: {}", columns.join(", "))
            }
        }
    }
}

impl std::error::Error for MapError {}
