//! SQLite staging sink.

use rusqlite::{Connection, params_from_iter};
use tracing::debug;

use somnia_model::{CellValue, MappedRow, staging_columns};

use crate::config::SinkConfig;
use crate::error::{Result, SinkError};
use crate::sink::StagingSink;

/// One connection for the lifetime of the batch.
///
/// A deferred transaction is started at open, so no insert is durable until
/// the single commit. If the sink is dropped without committing, the open
/// transaction rolls back when the connection closes.
pub struct SqliteSink {
    conn: Connection,
    insert_sql: String,
}

impl std::fmt::Debug for SqliteSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSink")
            .field("insert_sql", &self.insert_sql)
            .finish_non_exhaustive()
    }
}

impl SqliteSink {
    /// Validate the configuration, open the connection, and start the batch
    /// transaction.
    pub fn open(config: &SinkConfig) -> Result<Self> {
        config.validate()?;
        let conn = Connection::open(&config.database).map_err(|e| SinkError::Open {
            path: config.database.clone(),
            message: e.to_string(),
        })?;
        conn.execute_batch("BEGIN").map_err(|e| SinkError::Begin {
            message: e.to_string(),
        })?;
        debug!(
            database = %config.database.display(),
            table = %config.table,
            "connected to staging database"
        );
        Ok(Self {
            conn,
            insert_sql: build_insert_sql(&config.table),
        })
    }
}

impl StagingSink for SqliteSink {
    fn insert(&mut self, row_number: usize, row: &MappedRow) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare_cached(&self.insert_sql)
            .map_err(|e| SinkError::Insert {
                row: row_number,
                message: e.to_string(),
            })?;
        // Missing binds as SQL NULL, never as a literal.
        stmt.execute(params_from_iter(row.cells().iter().map(CellValue::as_text)))
            .map_err(|e| SinkError::Insert {
                row: row_number,
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.conn
            .execute_batch("COMMIT")
            .map_err(|e| SinkError::Commit {
                message: e.to_string(),
            })
    }
}

fn build_insert_sql(table: &str) -> String {
    let columns = staging_columns();
    let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("?{n}")).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    )
}
