//! Match result export.
//!
//! This crate writes the groups produced by the matcher in two formats:
//!
//! - **JSON**: the group array consumers already read, or a full export
//!   document with run metadata and summary
//! - **CSV**: one flat line per match record, for spreadsheets

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod csv_export;
pub mod error;
pub mod export;
pub mod json;

pub use csv_export::{CSV_HEADER, write_csv};
pub use error::{ReportError, Result};
pub use export::{ExportMeta, MatchExport};
pub use json::{write_export_json, write_json};

/// File format for [`write_to_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Full export document as JSON.
    Json,
    /// Flat CSV, one line per record.
    Csv,
}

impl ExportFormat {
    /// Picks a format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

/// Writes `export` to `path` in `format`, replacing any existing file.
pub fn write_to_path(path: &Path, format: ExportFormat, export: &MatchExport) -> Result<()> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Json => write_export_json(&mut writer, export)?,
        ExportFormat::Csv => write_csv(&mut writer, &export.groups)?,
    }
    writer.flush().map_err(io_error)?;
    Ok(())
}
