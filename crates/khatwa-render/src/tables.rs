//! Terminal tables for course materials and progress.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use khatwa_model::CourseTree;
use khatwa_nav::{MaterialEntry, compute_course_progress, effective_progress};

use crate::kind_style::{LOCK_GLYPH, kind_style};
use crate::outline::progress_label;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

/// One row per resource, in course order.
pub fn materials_table(entries: &[MaterialEntry<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Module"),
        header_cell("Lesson"),
        header_cell("File"),
        header_cell("Kind"),
        header_cell("Size"),
        header_cell("Duration"),
        header_cell("Access"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        let style = kind_style(entry.resource.kind);
        table.add_row(vec![
            Cell::new(&entry.module.title),
            Cell::new(&entry.lesson.title),
            Cell::new(&entry.resource.title),
            Cell::new(format!("{} {}", style.glyph, style.label)).fg(style.color),
            optional_cell(entry.resource.size_label.as_deref()),
            optional_cell(entry.resource.duration_label().as_deref()),
            access_cell(entry.locked),
        ]);
    }
    table
}

/// Per-module progress followed by a course total.
pub fn progress_table(tree: &CourseTree) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Module"),
        header_cell("Done"),
        header_cell("Lessons"),
        header_cell("Progress"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, module) in tree.modules.iter().enumerate() {
        let progress = effective_progress(module);
        let color = if progress.is_complete() {
            Color::Green
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&module.title),
            Cell::new(progress.completed),
            Cell::new(progress.total),
            Cell::new(progress_label(&progress)).fg(color),
        ]);
    }
    let total = compute_course_progress(tree);
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total.completed).add_attribute(Attribute::Bold),
        Cell::new(total.total).add_attribute(Attribute::Bold),
        Cell::new(progress_label(&total)).add_attribute(Attribute::Bold),
    ]);
    table
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

fn access_cell(locked: bool) -> Cell {
    if locked {
        Cell::new(LOCK_GLYPH).fg(Color::Yellow)
    } else {
        Cell::new("open").fg(Color::Green)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
