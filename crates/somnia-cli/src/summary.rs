use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ImportRunResult;

pub fn print_summary(result: &ImportRunResult) {
    println!("Source: {}", result.csv_path.display());
    match &result.database {
        Some(path) => println!("Staging: {} ({})", result.table, path.display()),
        None => println!("Staging: {} (dry run)", result.table),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Submitted"),
        header_cell("Failed"),
        header_cell("Committed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.rows_read),
        submitted_cell(result),
        count_cell(result.failures.len(), Color::Red),
        committed_cell(result),
    ]);
    println!("{table}");

    print_missing_columns(result);
    print_failure_table(result);
}

fn print_missing_columns(result: &ImportRunResult) {
    if result.missing_columns.is_empty() {
        return;
    }
    println!();
    println!("Missing source columns (staged as NULL):");
    for column in &result.missing_columns {
        println!("- {column}");
    }
}

fn print_failure_table(result: &ImportRunResult) {
    if result.failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Error")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in &result.failures {
        table.add_row(vec![
            Cell::new(failure.row).fg(Color::Red),
            Cell::new(&failure.message),
        ]);
    }
    println!();
    println!("Failed rows:");
    println!("{table}");
}

fn submitted_cell(result: &ImportRunResult) -> Cell {
    if result.dry_run {
        dim_cell("-")
    } else {
        Cell::new(result.submitted)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    }
}

fn committed_cell(result: &ImportRunResult) -> Cell {
    if result.dry_run {
        dim_cell("-")
    } else if result.committed {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
