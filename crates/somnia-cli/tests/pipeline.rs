//! End-to-end tests for the import pipeline against a real staging table.

use std::io::Write;
use std::path::Path;

use rusqlite::Connection;
use tempfile::TempDir;

use somnia_cli::pipeline::{load, map_rows, write};
use somnia_model::{ColumnMode, FailureMode};
use somnia_sink::SinkConfig;

const SURVEY_HEADER: &str = "Gender,Age,Occupation,Sleep Duration,Quality of Sleep,\
Physical Activity Level,Stress Level,BMI Category,Blood Pressure,Heart Rate,\
Daily Steps,Sleep Disorder";

const CREATE_STAGING: &str = "CREATE TABLE temp_import (
    gender TEXT, age TEXT, occupation TEXT, sleep_duration TEXT,
    sleep_quality TEXT, activity_minutes TEXT, stress_level TEXT,
    bmi_category TEXT, blood_pressure TEXT, heart_rate TEXT,
    daily_steps TEXT, sleep_disorder TEXT
)";

fn write_csv(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("survey.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    write!(file, "{content}").expect("write csv");
    path
}

fn create_staging(dir: &TempDir) -> std::path::PathBuf {
    let db = dir.path().join("health.db");
    let conn = Connection::open(&db).expect("create database");
    conn.execute_batch(CREATE_STAGING).expect("create table");
    db
}

fn staging_count(db: &Path) -> i64 {
    let conn = Connection::open(db).expect("reopen database");
    conn.query_row("SELECT COUNT(*) FROM temp_import", [], |r| r.get(0))
        .expect("count rows")
}

#[test]
fn stages_a_survey_export_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_csv(
        &dir,
        &format!(
            "{SURVEY_HEADER}\n\
             Male,27,Teacher,6.5,6,45,7,Normal,120/80,72,6000,None\n\
             Female,,Nurse,NaN,8,60,4,Overweight,130/85,68,7000,Insomnia\n"
        ),
    );
    let db = create_staging(&dir);

    let table = load(&csv).expect("load csv");
    assert_eq!(table.row_count(), 2);

    let mapped = map_rows(&table, ColumnMode::Strict).expect("map rows");
    assert!(mapped.missing_columns.is_empty());

    let config = SinkConfig::new(&db, "temp_import");
    let report = write(&config, &mapped.rows, FailureMode::Abort).expect("write batch");
    assert_eq!(report.submitted, 2);
    assert!(report.committed);

    let conn = Connection::open(&db).expect("reopen database");
    let (gender, disorder): (String, String) = conn
        .query_row(
            "SELECT gender, sleep_disorder FROM temp_import WHERE age = '27'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .expect("first row staged");
    assert_eq!(gender, "Male");
    assert_eq!(disorder, "None");

    let (age_null, duration_null): (bool, bool) = conn
        .query_row(
            "SELECT age IS NULL, sleep_duration IS NULL FROM temp_import WHERE gender = 'Female'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .expect("second row staged");
    assert!(age_null);
    assert!(duration_null);
}

#[test]
fn strict_mode_rejects_header_drift_before_writing() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_csv(&dir, "sex,years\nMale,27\n");

    let table = load(&csv).expect("load csv");
    let error = map_rows(&table, ColumnMode::Strict).unwrap_err();

    assert!(error.to_string().contains("resolve source columns"));
}

#[test]
fn lenient_mode_stages_drifted_header_as_nulls() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_csv(&dir, "sex,years\nMale,27\n");
    let db = create_staging(&dir);

    let table = load(&csv).expect("load csv");
    let mapped = map_rows(&table, ColumnMode::Lenient).expect("lenient map");
    assert_eq!(mapped.missing_columns.len(), 12);

    let config = SinkConfig::new(&db, "temp_import");
    let report = write(&config, &mapped.rows, FailureMode::Abort).expect("write batch");
    assert_eq!(report.submitted, 1);

    let conn = Connection::open(&db).expect("reopen database");
    let all_null: bool = conn
        .query_row(
            "SELECT gender IS NULL AND sleep_disorder IS NULL FROM temp_import",
            [],
            |r| r.get(0),
        )
        .expect("inspect staged row");
    assert!(all_null);
}

#[test]
fn missing_staging_table_aborts_with_nothing_committed() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write_csv(
        &dir,
        &format!("{SURVEY_HEADER}\nMale,27,Teacher,6.5,6,45,7,Normal,120/80,72,6000,None\n"),
    );
    let db = dir.path().join("bare.db");
    drop(Connection::open(&db).expect("create database"));

    let table = load(&csv).expect("load csv");
    let mapped = map_rows(&table, ColumnMode::Strict).expect("map rows");

    let config = SinkConfig::new(&db, "temp_import");
    let error = write(&config, &mapped.rows, FailureMode::Abort).unwrap_err();
    assert!(error.to_string().contains("write batch"));
}

#[test]
fn load_fails_for_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.csv");

    let error = load(&missing).unwrap_err();
    assert!(error.root_cause().to_string().contains("not found"));
}
