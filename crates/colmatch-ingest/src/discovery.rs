//! Source discovery: CSV files and directories of CSV files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use colmatch_model::Dataset;

use crate::csv_table::read_csv_dataset;
use crate::error::{IngestError, Result};

/// CSV files directly inside `dir`, ordered by lowercased file name.
///
/// Sub-directories are not descended into, whatever their name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let read_error = |source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut sheets = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && has_csv_extension(&path) {
            sheets.push(path);
        }
    }
    sheets.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
    });
    debug!(dir = %dir.display(), sheets = sheets.len(), "scanned directory");
    Ok(sheets)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Expands sources into CSV file paths, keeping the order sources were given.
///
/// A source is either a CSV file or a directory scanned with [`list_csv_files`].
pub fn expand_sources(sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for source in sources {
        if source.is_dir() {
            files.extend(list_csv_files(source)?);
        } else if source.is_file() {
            files.push(source.clone());
        } else {
            return Err(IngestError::SourceNotFound {
                path: source.clone(),
            });
        }
    }
    Ok(files)
}

/// Loads every dataset reachable from `sources`.
///
/// Empty CSV files are skipped with a warning. Two files with the same stem
/// are rejected, since datasets are addressed by name.
pub fn load_sources(sources: &[PathBuf]) -> Result<Vec<Dataset>> {
    let files = expand_sources(sources)?;
    let mut seen = BTreeSet::new();
    let mut datasets = Vec::with_capacity(files.len());

    for path in files {
        let dataset = match read_csv_dataset(&path) {
            Ok(dataset) => dataset,
            Err(IngestError::EmptyCsv { path }) => {
                warn!(path = %path.display(), "skipping empty sheet");
                continue;
            }
            Err(error) => return Err(error),
        };
        if !seen.insert(dataset.name.clone()) {
            return Err(IngestError::DuplicateDataset {
                name: dataset.name.to_string(),
                path,
            });
        }
        datasets.push(dataset);
    }

    info!(dataset_count = datasets.len(), "sources loaded");
    Ok(datasets)
}
