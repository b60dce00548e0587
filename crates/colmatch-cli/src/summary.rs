use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colmatch_model::{Dataset, MatchGroup, MatchKind, RowNumber};
use colmatch_report::MatchExport;

pub fn print_sheets(datasets: &[&Dataset]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Columns"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for dataset in datasets {
        table.add_row(vec![
            name_cell(dataset.name.as_str()),
            Cell::new(dataset.column_count()),
            Cell::new(dataset.row_count()),
        ]);
    }
    println!("{table}");
}

pub fn print_rows(dataset: &Dataset, rows: &[(RowNumber, &[String])]) {
    println!("Sheet: {}", dataset.name);
    let mut table = Table::new();
    let mut header = vec![header_cell("Row")];
    header.extend(dataset.headers.iter().map(|h| header_cell(h)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (row_number, cells) in rows {
        let mut row = vec![dim_cell(row_number)];
        row.extend(cells.iter().map(Cell::new));
        table.add_row(row);
    }
    println!("{table}");
    if dataset.row_count() > rows.len() {
        println!("({} of {} rows shown)", rows.len(), dataset.row_count());
    }
}

pub fn print_match_summary(export: &MatchExport) {
    let meta = &export.meta;
    println!("Compared: {} -> {}", meta.dataset1, meta.dataset2);
    if meta.options.fuzzy {
        println!("Fuzzy matching: on (threshold {})", meta.options.threshold);
    } else {
        println!("Fuzzy matching: off");
    }
    if export.groups.is_empty() {
        println!("No matches in {} column pairs.", export.summary.column_pairs);
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&format!("{} column", meta.dataset1)),
        header_cell(&format!("{} column", meta.dataset2)),
        header_cell("Exact"),
        header_cell("Fuzzy"),
        header_cell("Total"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for group in &export.groups {
        table.add_row(vec![
            column_cell(&group.header1, group.column_a),
            column_cell(&group.header2, group.column_b),
            count_cell(group.exact_count(), Color::Green),
            count_cell(group.fuzzy_count(), Color::Yellow),
            Cell::new(group.len()),
        ]);
    }
    let summary = &export.summary;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} column pairs", summary.column_pairs)),
        count_cell(summary.exact_matches, Color::Green).add_attribute(Attribute::Bold),
        count_cell(summary.fuzzy_matches, Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(summary.total_matches()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_match_details(groups: &[MatchGroup]) {
    for group in groups {
        println!();
        println!("{} / {}", group.header1, group.header2);
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Row 1"),
            header_cell("Value 1"),
            header_cell("Row 2"),
            header_cell("Value 2"),
            header_cell("Kind"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 4, CellAlignment::Center);
        for record in &group.matches {
            table.add_row(vec![
                dim_cell(record.row_a),
                Cell::new(&record.value_a),
                dim_cell(record.row_b),
                Cell::new(&record.value_b),
                kind_cell(record.kind()),
            ]);
        }
        println!("{table}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
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

fn name_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn column_cell(header: &str, index: usize) -> Cell {
    if header.is_empty() {
        dim_cell(format!("(column {})", index + 1))
    } else {
        Cell::new(header)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn kind_cell(kind: MatchKind) -> Cell {
    match kind {
        MatchKind::Exact => Cell::new("exact").fg(Color::Green),
        MatchKind::Fuzzy => Cell::new("fuzzy").fg(Color::Yellow),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
