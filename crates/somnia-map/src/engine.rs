//! Row mapping engine.

use tracing::warn;

use somnia_model::{
    CellValue, ColumnMode, FIELD_COUNT, MappedRow, STAGING_FIELDS, is_missing_value,
};

use crate::error::MapError;

/// Binds each staging field to its source column position in a file header.
///
/// Header matching is an exact string comparison, including case and
/// internal spacing. Resolution happens once per file; [`RowMapper::map_row`]
/// is then a pure function over individual records.
#[derive(Debug, Clone)]
pub struct RowMapper {
    indices: [Option<usize>; FIELD_COUNT],
}

impl RowMapper {
    /// Resolve the staging fields against a file header.
    ///
    /// In [`ColumnMode::Strict`] an absent expected column fails resolution
    /// with the full list of missing headers, before any row is mapped.
    /// In [`ColumnMode::Lenient`] each absent column is logged once and the
    /// field maps to the null marker for every row.
    pub fn resolve(headers: &[String], mode: ColumnMode) -> Result<Self, MapError> {
        let mut indices = [None; FIELD_COUNT];
        let mut missing = Vec::new();
        for (slot, field) in STAGING_FIELDS.iter().enumerate() {
            match headers.iter().position(|header| header == field.source) {
                Some(idx) => indices[slot] = Some(idx),
                None => missing.push(field.source.to_string()),
            }
        }

        if !missing.is_empty() {
            if mode == ColumnMode::Strict {
                return Err(MapError::MissingColumns { columns: missing });
            }
            for column in &missing {
                warn!(
                    column = %column,
                    "expected source column not found; staging values will be NULL"
                );
            }
        }

        Ok(Self { indices })
    }

    /// Source headers that did not resolve.
    #[must_use]
    pub fn missing_sources(&self) -> Vec<&'static str> {
        STAGING_FIELDS
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.indices[*slot].is_none())
            .map(|(_, field)| field.source)
            .collect()
    }

    /// Map one source record onto the staging columns.
    ///
    /// Absent cells and not-a-number sentinels become [`CellValue::Missing`];
    /// every other cell passes through verbatim, with no trimming or casting.
    #[must_use]
    pub fn map_row(&self, row: &[String]) -> MappedRow {
        let cells: [CellValue; FIELD_COUNT] = std::array::from_fn(|slot| {
            match self.indices[slot].and_then(|idx| row.get(idx)) {
                Some(raw) if !is_missing_value(raw) => CellValue::Text(raw.clone()),
                _ => CellValue::Missing,
            }
        });
        MappedRow::new(cells)
    }
}
