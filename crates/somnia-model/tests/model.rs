use somnia_model::{
    CellValue, FIELD_COUNT, MappedRow, STAGING_FIELDS, is_missing_value, staging_columns,
};

#[test]
fn staging_columns_match_insert_order() {
    assert_eq!(
        staging_columns(),
        vec![
            "gender",
            "age",
            "occupation",
            "sleep_duration",
            "sleep_quality",
            "activity_minutes",
            "stress_level",
            "bmi_category",
            "blood_pressure",
            "heart_rate",
            "daily_steps",
            "sleep_disorder",
        ]
    );
}

#[test]
fn row_built_from_sentinel_cells_is_all_missing() {
    let raw = ["", "NaN", " ", "nan", "", "NAN", "", "", "", "", "", ""];
    assert_eq!(raw.len(), FIELD_COUNT);
    let cells: [CellValue; FIELD_COUNT] = std::array::from_fn(|idx| {
        if is_missing_value(raw[idx]) {
            CellValue::Missing
        } else {
            CellValue::Text(raw[idx].to_string())
        }
    });
    let row = MappedRow::new(cells);
    assert!(row.is_all_missing());
}

#[test]
fn field_sources_do_not_collide() {
    let mut sources: Vec<&str> = STAGING_FIELDS.iter().map(|f| f.source).collect();
    sources.sort_unstable();
    sources.dedup();
    assert_eq!(sources.len(), FIELD_COUNT);
}
