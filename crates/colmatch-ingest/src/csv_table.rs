use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use colmatch_model::{Dataset, DatasetName};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Drops trailing empty cells so short rows stay short, the way spreadsheet
/// exports leave them.
fn trim_trailing_empty(row: &mut Vec<String>) {
    while row.last().is_some_and(String::is_empty) {
        row.pop();
    }
}

/// Derives the dataset name for a CSV file from its file stem.
pub fn dataset_name_for(path: &Path) -> Result<DatasetName> {
    let stem = path
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_string();
    DatasetName::new(stem).map_err(|source| IngestError::InvalidName {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a CSV file into a dataset named after the file stem.
///
/// The first record is the header row. Every following record is a data row;
/// cells are kept as written, except that trailing empty cells are dropped.
/// Blank lines between records become empty rows, so row numbers keep
/// pointing at the source lines.
pub fn read_csv_dataset(path: &Path) -> Result<Dataset> {
    let name = dataset_name_for(path)?;
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(name, file, path)
}

/// Reads CSV content from any reader into a dataset called `name`.
pub fn read_csv_dataset_from_reader<R: Read>(name: DatasetName, reader: R) -> Result<Dataset> {
    let origin = Path::new(name.as_str()).to_path_buf();
    read_records(name, reader, &origin)
}

/// Number of `\n` characters inside quoted cells of `record`.
fn embedded_newlines(record: &StringRecord) -> u64 {
    record
        .iter()
        .map(|cell| cell.bytes().filter(|byte| *byte == b'\n').count() as u64)
        .sum()
}

fn read_records<R: Read>(name: DatasetName, mut input: R, origin: &Path) -> Result<Dataset> {
    let mut contents = String::new();
    input
        .read_to_string(&mut contents)
        .map_err(|source| IngestError::FileRead {
            path: origin.to_path_buf(),
            source,
        })?;
    // Terminate the last record the way the others are, so every record read
    // accounts for exactly one line break.
    if !contents.ends_with(['\n', '\r']) {
        let terminator = if contents.contains("\r\n") { "\r\n" } else { "\n" };
        contents.push_str(terminator);
    }

    let parse_error = |source| IngestError::CsvParse {
        path: origin.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let mut record = StringRecord::new();

    if !reader.read_record(&mut record).map_err(parse_error)? {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    }
    let mut headers: Vec<String> = record.iter().map(normalize_header).collect();
    trim_trailing_empty(&mut headers);

    let mut dataset = Dataset::new(name, headers);
    let mut line = reader.position().line();
    while reader.read_record(&mut record).map_err(parse_error)? {
        let next_line = reader.position().line();
        // The reader skips blank lines silently; whatever it consumed beyond the
        // record itself and its terminator was blank.
        let blank_lines = (next_line - line).saturating_sub(1 + embedded_newlines(&record));
        for _ in 0..blank_lines {
            dataset.push_row(Vec::new());
        }
        line = next_line;

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        trim_trailing_empty(&mut row);
        dataset.push_row(row);
    }

    debug!(
        dataset = %dataset.name,
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "parsed dataset"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use colmatch_model::RowNumber;

    use super::*;

    fn read(contents: &str) -> Dataset {
        read_csv_dataset_from_reader(DatasetName::new("Sheet").unwrap(), contents.as_bytes())
            .unwrap()
    }

    #[test]
    fn header_is_cleaned_cells_are_not() {
        let dataset = read("\u{feff} Full   Name ,Code\n  Jon ,A1\n");
        assert_eq!(dataset.headers, vec!["Full Name", "Code"]);
        assert_eq!(dataset.rows, vec![vec!["  Jon ".to_string(), "A1".to_string()]]);
    }

    #[test]
    fn trailing_empty_cells_make_rows_ragged() {
        let dataset = read("A,B,C\nx,,\n,y,\n,,\n");
        assert_eq!(dataset.rows[0], vec!["x".to_string()]);
        assert_eq!(dataset.rows[1], vec![String::new(), "y".to_string()]);
        assert!(dataset.rows[2].is_empty());
        assert_eq!(dataset.cell(0, 1), None);
        assert_eq!(dataset.cell(1, 0), Some(""));
    }

    #[test]
    fn blank_lines_keep_row_numbers_aligned() {
        let dataset = read("H\na\n\nb\n");
        assert_eq!(dataset.row_count(), 3);
        assert!(dataset.rows[1].is_empty());
        let row_of_b = (0..dataset.row_count())
            .find(|row| dataset.cell(*row, 0) == Some("b"))
            .map(RowNumber::from_index);
        assert_eq!(row_of_b.map(RowNumber::get), Some(4));
    }

    #[test]
    fn blank_lines_after_header_and_crlf_endings() {
        let dataset = read("H\r\n\r\n\r\na\r\n\r\nb");
        assert_eq!(dataset.row_count(), 5);
        assert_eq!(dataset.cell(2, 0), Some("a"));
        assert!(dataset.rows[3].is_empty());
        assert_eq!(dataset.cell(4, 0), Some("b"));
    }

    #[test]
    fn quoted_newlines_do_not_add_rows() {
        let dataset = read("H,I\n\"two\nlines\",x\n\ny\n");
        assert_eq!(dataset.cell(0, 0), Some("two\nlines"));
        assert!(dataset.rows[1].is_empty());
        assert_eq!(dataset.cell(2, 0), Some("y"));
        assert_eq!(dataset.row_count(), 3);
    }

    #[test]
    fn trailing_blank_lines_add_no_rows() {
        let dataset = read("H\na\n\n\n");
        assert_eq!(dataset.row_count(), 1);
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let dataset = read("A,B\n");
        assert_eq!(dataset.column_count(), 2);
        assert!(dataset.is_empty());
    }

    #[test]
    fn empty_input_is_an_error() {
        let result =
            read_csv_dataset_from_reader(DatasetName::new("Sheet").unwrap(), "".as_bytes());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }
}
