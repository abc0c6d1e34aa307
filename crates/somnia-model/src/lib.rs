pub mod fields;
pub mod missing;
pub mod options;
pub mod row;

pub use fields::{FIELD_COUNT, STAGING_FIELDS, StagingField, staging_columns};
pub use missing::is_missing_value;
pub use options::{ColumnMode, FailureMode, ImportOptions};
pub use row::{CellValue, MappedRow};
