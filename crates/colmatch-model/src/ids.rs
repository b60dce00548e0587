#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetName(String);

impl DatasetName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidDatasetName(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DatasetName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatasetName> for String {
    fn from(name: DatasetName) -> Self {
        name.0
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row number as reported to users: the 1-based line of the source sheet.
///
/// Data row `0` sits below the header row, so it is reported as row `2`.
/// This type is the only place that offset is applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RowNumber(usize);

impl RowNumber {
    /// Rows that precede data row `0` in the source: the header plus 1-based numbering.
    pub const DATA_OFFSET: usize = 2;

    pub fn from_index(index: usize) -> Self {
        Self(index + Self::DATA_OFFSET)
    }

    /// Converts back to a zero-based data row index.
    ///
    /// Returns `None` for numbers that point at the header row or above.
    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(Self::DATA_OFFSET)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
