use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Output: {}", summary.output.display());
    if let Some(path) = &summary.classification_log {
        println!("Classification log: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Inputs"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Continuous"),
        header_cell("Discrete"),
        header_cell("Filled"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 0..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let (continuous, discrete, filled) = match summary.fill_counts {
        Some(counts) => (
            Cell::new(counts.continuous),
            Cell::new(counts.discrete),
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold),
        ),
        None => (dim_cell("-"), dim_cell("-"), dim_cell("-")),
    };
    table.add_row(vec![
        Cell::new(summary.inputs),
        Cell::new(summary.rows),
        Cell::new(summary.columns),
        continuous,
        discrete,
        filled,
    ]);
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
