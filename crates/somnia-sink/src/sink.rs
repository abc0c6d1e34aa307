//! The sink seam.

use somnia_model::MappedRow;

use crate::error::Result;

/// A destination for one batch of mapped rows.
///
/// Lifecycle: the implementation connects on construction, accepts inserts,
/// and makes nothing durable until [`StagingSink::commit`]. Dropping a sink
/// without committing discards every insert of the batch.
pub trait StagingSink {
    /// Execute one parameterized insert. `row_number` is the 1-indexed data
    /// row (header excluded), used for failure accounting.
    fn insert(&mut self, row_number: usize, row: &MappedRow) -> Result<()>;

    /// Commit the whole batch. Called exactly once, after the row loop.
    fn commit(&mut self) -> Result<()>;
}
