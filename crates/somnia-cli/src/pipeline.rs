//! Import pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: read the whole CSV file into an in-memory source table
//! 2. **Map**: resolve the staging fields against the header, map each record
//! 3. **Write**: one connection, one insert per row, one commit after the loop
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. There is no overlap: the file is fully materialized before the
//! first insert.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use somnia_ingest::{SourceTable, read_source_table};
use somnia_map::RowMapper;
use somnia_model::{ColumnMode, FailureMode, MappedRow};
use somnia_sink::{ImportReport, SinkConfig, SqliteSink, write_rows};

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Read the source file into memory.
pub fn load(path: &Path) -> Result<SourceTable> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_source_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        path = %path.display(),
        columns = ?table.headers,
        rows = table.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "source file loaded"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Map
// ============================================================================

/// Result of the map stage.
#[derive(Debug)]
pub struct MapResult {
    /// One mapped row per source record, in file order.
    pub rows: Vec<MappedRow>,
    /// Expected source headers absent from the file (lenient mode only).
    pub missing_columns: Vec<&'static str>,
}

/// Resolve the staging fields against the header and map every record.
pub fn map_rows(table: &SourceTable, mode: ColumnMode) -> Result<MapResult> {
    let span = info_span!("map");
    let _guard = span.enter();
    let start = Instant::now();

    let mapper = RowMapper::resolve(&table.headers, mode).context("resolve source columns")?;
    let rows: Vec<MappedRow> = table.rows.iter().map(|row| mapper.map_row(row)).collect();
    debug!(
        rows = rows.len(),
        missing_columns = mapper.missing_sources().len(),
        duration_ms = start.elapsed().as_millis(),
        "mapping complete"
    );
    Ok(MapResult {
        rows,
        missing_columns: mapper.missing_sources(),
    })
}

// ============================================================================
// Stage 3: Write
// ============================================================================

/// Open the sink and write the batch.
pub fn write(config: &SinkConfig, rows: &[MappedRow], mode: FailureMode) -> Result<ImportReport> {
    let span = info_span!("write", table = %config.table);
    let _guard = span.enter();
    let start = Instant::now();

    let mut sink = SqliteSink::open(config).context("open staging database")?;
    info!(
        database = %config.database.display(),
        table = %config.table,
        "connected to staging database"
    );

    let report = write_rows(&mut sink, rows, mode).context("write batch")?;
    info!(
        submitted = report.submitted,
        failed = report.failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch written"
    );
    Ok(report)
}
