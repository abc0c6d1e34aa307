use std::path::PathBuf;

use somnia_sink::RowFailure;

#[derive(Debug)]
pub struct ImportRunResult {
    pub csv_path: PathBuf,
    pub database: Option<PathBuf>,
    pub table: String,
    pub rows_read: usize,
    pub submitted: usize,
    pub failures: Vec<RowFailure>,
    pub missing_columns: Vec<&'static str>,
    pub committed: bool,
    pub dry_run: bool,
    pub has_errors: bool,
}
