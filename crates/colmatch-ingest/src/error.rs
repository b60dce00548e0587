//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

use colmatch_model::ModelError;

/// Errors that can occur while loading or looking up datasets.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Source path does not exist.
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a source file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to read or parse a CSV file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no records at all, not even a header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// File name does not yield a usable dataset name.
    #[error("cannot derive dataset name from {path}: {source}")]
    InvalidName {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    // === Store Errors ===
    /// Two sources produced the same dataset name.
    #[error("duplicate dataset '{name}' (from {path})")]
    DuplicateDataset { name: String, path: PathBuf },

    /// Requested dataset is not loaded.
    #[error("dataset not found: {name}")]
    DatasetNotFound { name: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
