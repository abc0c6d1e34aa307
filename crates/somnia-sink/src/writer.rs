//! Batch writer: the row loop and the single commit.

use tracing::{debug, warn};

use somnia_model::{FailureMode, MappedRow};

use crate::error::Result;
use crate::sink::StagingSink;

/// One row that failed to insert in isolation mode.
#[derive(Debug, Clone)]
pub struct RowFailure {
    /// 1-indexed data row number, header excluded.
    pub row: usize,
    pub message: String,
}

/// Accounting for one batch.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Rows submitted to the sink, incremented once per successful insert.
    pub submitted: usize,
    /// Rows skipped in isolation mode.
    pub failures: Vec<RowFailure>,
    /// Whether the batch commit was issued.
    pub committed: bool,
}

impl ImportReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Insert every mapped row, then commit once.
///
/// In [`FailureMode::Abort`] the first failing insert propagates
/// immediately: the loop halts and no commit is issued, so rows already
/// executed in the batch are discarded when the sink closes. In
/// [`FailureMode::Isolate`] the failure is recorded, the loop continues,
/// and the surviving rows are committed.
pub fn write_rows(
    sink: &mut dyn StagingSink,
    rows: &[MappedRow],
    mode: FailureMode,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();
    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 1;
        match sink.insert(row_number, row) {
            Ok(()) => report.submitted += 1,
            Err(error) => match mode {
                FailureMode::Abort => return Err(error),
                FailureMode::Isolate => {
                    warn!(row = row_number, %error, "row insert failed; continuing");
                    report.failures.push(RowFailure {
                        row: row_number,
                        message: error.to_string(),
                    });
                }
            },
        }
    }
    sink.commit()?;
    report.committed = true;
    debug!(
        submitted = report.submitted,
        failed = report.failures.len(),
        "batch committed"
    );
    Ok(report)
}
