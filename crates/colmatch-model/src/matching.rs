//! Match records and groups produced by comparing two datasets.
//!
//! Serialized field names follow the JSON shape consumers already read
//! (`originalRow1`, `val1`, `isFuzzy`, `tab1`, `header1`, ...).

use serde::{Deserialize, Serialize};

use crate::{DatasetName, RowNumber};

/// How a record was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// One correspondence between a cell of dataset A and a cell of dataset B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "originalRow1")]
    pub row_a: RowNumber,
    #[serde(rename = "originalRow2")]
    pub row_b: RowNumber,
    #[serde(rename = "val1")]
    pub value_a: String,
    #[serde(rename = "val2")]
    pub value_b: String,
    #[serde(rename = "isFuzzy")]
    pub fuzzy: bool,
}

impl MatchRecord {
    pub fn exact(row_a: RowNumber, row_b: RowNumber, value_a: &str, value_b: &str) -> Self {
        Self {
            row_a,
            row_b,
            value_a: value_a.to_string(),
            value_b: value_b.to_string(),
            fuzzy: false,
        }
    }

    pub fn fuzzy(row_a: RowNumber, row_b: RowNumber, value_a: &str, value_b: &str) -> Self {
        Self {
            fuzzy: true,
            ..Self::exact(row_a, row_b, value_a, value_b)
        }
    }

    pub fn kind(&self) -> MatchKind {
        if self.fuzzy {
            MatchKind::Fuzzy
        } else {
            MatchKind::Exact
        }
    }
}

/// All records found for one (column of A, column of B) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGroup {
    #[serde(rename = "tab1")]
    pub dataset_a: DatasetName,
    #[serde(rename = "tab2")]
    pub dataset_b: DatasetName,
    pub header1: String,
    pub header2: String,
    #[serde(rename = "column1")]
    pub column_a: usize,
    #[serde(rename = "column2")]
    pub column_b: usize,
    pub matches: Vec<MatchRecord>,
}

impl MatchGroup {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn exact_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.fuzzy).count()
    }

    pub fn fuzzy_count(&self) -> usize {
        self.matches.iter().filter(|m| m.fuzzy).count()
    }
}

/// Counts describing one matching run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub column_pairs: usize,
    pub groups: usize,
    pub exact_matches: usize,
    pub fuzzy_matches: usize,
}

impl MatchSummary {
    pub fn from_groups(column_pairs: usize, groups: &[MatchGroup]) -> Self {
        let mut summary = Self {
            column_pairs,
            groups: groups.len(),
            ..Self::default()
        };
        for group in groups {
            summary.exact_matches += group.exact_count();
            summary.fuzzy_matches += group.fuzzy_count();
        }
        summary
    }

    pub fn total_matches(&self) -> usize {
        self.exact_matches + self.fuzzy_matches
    }
}
