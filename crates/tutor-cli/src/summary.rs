use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tutor_cli::steps::StepFailure;
use tutor_model::Value;
use tutor_reactive::{ControlKind, Page};

/// One row of the `pages` listing.
pub struct PageRow {
    pub path: &'static str,
    pub name: &'static str,
    pub controls: usize,
    pub bindings: usize,
}

pub fn print_pages(rows: &[PageRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Path"),
        header_cell("Name"),
        header_cell("Controls"),
        header_cell("Bindings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.path).fg(Color::Cyan),
            Cell::new(row.name),
            Cell::new(row.controls),
            Cell::new(row.bindings),
        ]);
    }
    println!("{table}");
}

pub fn print_page(page: &Page) {
    println!("Page: {} ({})", page.name(), page.path());

    let mut controls = Table::new();
    controls.set_header(vec![
        header_cell("Control"),
        header_cell("Kind"),
        header_cell("Initial"),
    ]);
    apply_table_style(&mut controls);
    for control in page.controls() {
        controls.add_row(vec![
            Cell::new(control.id.as_str()),
            kind_cell(&control.kind),
            value_cell(&control.initial),
        ]);
    }
    println!("{controls}");

    let mut bindings = Table::new();
    bindings.set_header(vec![
        header_cell("#"),
        header_cell("Binding"),
        header_cell("Sources"),
        header_cell("Destinations"),
    ]);
    apply_table_style(&mut bindings);
    align_column(&mut bindings, 0, CellAlignment::Right);
    for (index, binding) in page.bindings().iter().enumerate() {
        bindings.add_row(vec![
            Cell::new(index + 1),
            Cell::new(binding.name()).add_attribute(Attribute::Bold),
            Cell::new(join(binding.sources())),
            Cell::new(join(binding.destinations())),
        ]);
    }
    println!("{bindings}");
}

/// Binding failures go to stderr; stdout carries the JSON.
pub fn print_failures(failures: &[StepFailure]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Binding"),
        header_cell("Error"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    for failure in failures {
        table.add_row(vec![
            Cell::new(failure.step.as_deref().unwrap_or("load")),
            Cell::new(&failure.binding).fg(Color::Red),
            Cell::new(failure.error.to_string()),
            Cell::new(failure.skipped.join(", ")).add_attribute(Attribute::Dim),
        ]);
    }
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn kind_cell(kind: &ControlKind) -> Cell {
    let label = match kind {
        ControlKind::Slider { min, max, step } => format!("slider [{min}, {max}] step {step}"),
        other => other.label().to_string(),
    };
    Cell::new(label)
}

fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Empty => Cell::new("-").add_attribute(Attribute::Dim),
        Value::Sequence(values) => Cell::new(format!("{values:?}")),
        other => Cell::new(other.as_text()),
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
