//! The fixed staging field table.
//!
//! Each destination column of the staging table is paired with the exact
//! source header it is read from. Header matching is case- and
//! spacing-sensitive; these strings are the contract with the survey export.

/// One destination column of the staging table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagingField {
    /// Column name in the staging table.
    pub column: &'static str,
    /// Exact header the value is read from in the source CSV.
    pub source: &'static str,
}

/// Number of staging columns.
pub const FIELD_COUNT: usize = 12;

/// Destination columns in insert order.
pub const STAGING_FIELDS: [StagingField; FIELD_COUNT] = [
    StagingField {
        column: "gender",
        source: "Gender",
    },
    StagingField {
        column: "age",
        source: "Age",
    },
    StagingField {
        column: "occupation",
        source: "Occupation",
    },
    StagingField {
        column: "sleep_duration",
        source: "Sleep Duration",
    },
    StagingField {
        column: "sleep_quality",
        source: "Quality of Sleep",
    },
    StagingField {
        column: "activity_minutes",
        source: "Physical Activity Level",
    },
    StagingField {
        column: "stress_level",
        source: "Stress Level",
    },
    StagingField {
        column: "bmi_category",
        source: "BMI Category",
    },
    StagingField {
        column: "blood_pressure",
        source: "Blood Pressure",
    },
    StagingField {
        column: "heart_rate",
        source: "Heart Rate",
    },
    StagingField {
        column: "daily_steps",
        source: "Daily Steps",
    },
    StagingField {
        column: "sleep_disorder",
        source: "Sleep Disorder",
    },
];

/// Staging column names in insert order.
#[must_use]
pub fn staging_columns() -> Vec<&'static str> {
    STAGING_FIELDS.iter().map(|field| field.column).collect()
}
