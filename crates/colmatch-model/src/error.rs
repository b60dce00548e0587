use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("dataset name must not be empty")]
    InvalidDatasetName(String),
    #[error("fuzzy threshold {0} is outside 0..=100")]
    ThresholdOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
