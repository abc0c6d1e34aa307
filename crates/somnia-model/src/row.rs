use serde::{Deserialize, Serialize};

use crate::fields::FIELD_COUNT;

/// A single staging value: either raw source text or the explicit null
/// marker. `Missing` binds as SQL NULL; it is never written as a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// The raw text, when present.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// One source record mapped onto the staging columns, in insert order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedRow {
    cells: [CellValue; FIELD_COUNT],
}

impl MappedRow {
    #[must_use]
    pub fn new(cells: [CellValue; FIELD_COUNT]) -> Self {
        Self { cells }
    }

    /// Cells in staging-column order.
    #[must_use]
    pub fn cells(&self) -> &[CellValue; FIELD_COUNT] {
        &self.cells
    }

    /// Cell at a staging-column position.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    /// True when every cell is the null marker.
    #[must_use]
    pub fn is_all_missing(&self) -> bool {
        self.cells.iter().all(CellValue::is_missing)
    }
}
