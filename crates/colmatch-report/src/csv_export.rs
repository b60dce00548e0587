//! Flat CSV export: one line per match record.

use std::io::Write;

use colmatch_model::MatchGroup;

use crate::error::Result;

pub const CSV_HEADER: [&str; 9] = [
    "tab1", "header1", "tab2", "header2", "row1", "row2", "value1", "value2", "kind",
];

/// Writes every record of every group, in group order.
pub fn write_csv<W: Write>(writer: W, groups: &[MatchGroup]) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    out.write_record(CSV_HEADER)?;
    for group in groups {
        for record in &group.matches {
            let row1 = record.row_a.to_string();
            let row2 = record.row_b.to_string();
            out.write_record([
                group.dataset_a.as_str(),
                group.header1.as_str(),
                group.dataset_b.as_str(),
                group.header2.as_str(),
                row1.as_str(),
                row2.as_str(),
                record.value_a.as_str(),
                record.value_b.as_str(),
                record.kind().as_str(),
            ])?;
        }
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}
