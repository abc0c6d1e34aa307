use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// The loaded CSV content: column names as found in the file header and
/// every data row as raw string cells. Created once by the loader and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    /// Number of data rows (header excluded).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Read a CSV file into a [`SourceTable`].
///
/// The first row is the header. Cells are kept verbatim; the only rewrite
/// is stripping a UTF-8 BOM from the first header cell. Short rows are
/// padded with empty cells and long rows truncated, so every row has
/// header width.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let file = open_source(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            return Err(IngestError::Empty {
                path: path.to_path_buf(),
            });
        }
    };

    let mut headers: Vec<String> = header_record.iter().map(str::to_string).collect();
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let width = headers.len();
    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "source table loaded"
    );

    Ok(SourceTable { headers, rows })
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
