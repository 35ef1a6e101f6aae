use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use census_cli::render::{report_headers, row_cells};
use census_model::{EstimateYears, JurisdictionOption, NO_VALUE, Report, StateCatalogEntry};

pub fn print_states(states: &[StateCatalogEntry]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("State")]);
    apply_table_style(&mut table);
    for state in states {
        table.add_row(vec![code_cell(&state.code), Cell::new(&state.name)]);
    }
    println!("{table}");
}

pub fn print_options(options: &[JurisdictionOption]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("GEOID"), header_cell("Name")]);
    apply_table_style(&mut table);
    for option in options {
        table.add_row(vec![code_cell(&option.code), Cell::new(&option.label)]);
    }
    println!("{table}");
}

pub fn print_report(report: &Report, years: EstimateYears) {
    let mut table = Table::new();
    table.set_header(
        report_headers(report, years)
            .iter()
            .map(|label| header_cell(label))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (offset, metric) in report.columns.iter().enumerate() {
        if metric.is_population() {
            align_column(&mut table, 3 + offset, CellAlignment::Right);
        }
    }
    for row in &report.rows {
        table.add_row(
            row_cells(report, row)
                .into_iter()
                .map(|value| {
                    if value == NO_VALUE {
                        dim_cell(value)
                    } else {
                        Cell::new(value)
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn code_cell(code: &str) -> Cell {
    Cell::new(code).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
