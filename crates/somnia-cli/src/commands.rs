use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use somnia_model::{ColumnMode, FailureMode, STAGING_FIELDS};
use somnia_sink::SinkConfig;

use crate::cli::ImportArgs;
use crate::pipeline::{load, map_rows, write};
use crate::summary::apply_table_style;
use crate::types::ImportRunResult;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Staging Column", "Source Header"]);
    apply_table_style(&mut table);
    for field in STAGING_FIELDS {
        table.add_row(vec![field.column, field.source]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_import(args: &ImportArgs) -> Result<ImportRunResult> {
    let import_span = info_span!("import", csv = %args.csv.display());
    let _import_guard = import_span.enter();
    info!(csv = %args.csv.display(), dry_run = args.dry_run, "starting import");

    let column_mode = if args.strict {
        ColumnMode::Strict
    } else {
        ColumnMode::Lenient
    };
    let failure_mode = if args.continue_on_error {
        FailureMode::Isolate
    } else {
        FailureMode::Abort
    };

    let table = load(&args.csv)?;
    let mapped = map_rows(&table, column_mode)?;

    if args.dry_run {
        info!(rows = mapped.rows.len(), "dry run; no connection opened");
        return Ok(ImportRunResult {
            csv_path: args.csv.clone(),
            database: args.database.clone(),
            table: args.table.clone(),
            rows_read: table.row_count(),
            submitted: 0,
            failures: Vec::new(),
            missing_columns: mapped.missing_columns,
            committed: false,
            dry_run: true,
            has_errors: false,
        });
    }

    let database = args
        .database
        .clone()
        .context("--database is required unless --dry-run is set")?;
    let config = SinkConfig::new(database.clone(), args.table.clone());
    let report = write(&config, &mapped.rows, failure_mode)?;

    info!(
        rows = report.submitted,
        table = %args.table,
        "inserted rows into the staging table"
    );

    let has_errors = report.has_failures();
    Ok(ImportRunResult {
        csv_path: args.csv.clone(),
        database: Some(database),
        table: args.table.clone(),
        rows_read: table.row_count(),
        submitted: report.submitted,
        failures: report.failures,
        missing_columns: mapped.missing_columns,
        committed: report.committed,
        dry_run: false,
        has_errors,
    })
}
