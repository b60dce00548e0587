//! Column-pair matching engine.

use std::collections::HashSet;

use colmatch_model::{Dataset, MatchGroup, MatchOptions, MatchRecord, MatchSummary, RowNumber};
use tracing::{debug, info, trace};

use crate::fuzzy::keys_fuzzy_match;
use crate::index::ExactIndex;
use crate::normalize::normalize_key;

/// Result of running every column of one dataset against every column of another.
#[derive(Debug, Clone, Default)]
pub struct MatchRun {
    /// Groups in column-pair order; only pairs with at least one record.
    pub groups: Vec<MatchGroup>,
    /// Number of column pairs compared.
    pub column_pairs: usize,
}

impl MatchRun {
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary::from_groups(self.column_pairs, &self.groups)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> Vec<MatchGroup> {
        self.groups
    }
}

/// Engine comparing the cells of two datasets column pair by column pair.
///
/// For each pair the right-hand column is indexed by normalized key, then
/// every left-hand row is looked up in the index (exact records) and, when
/// fuzzy matching is enabled, compared against every right-hand row (fuzzy
/// records). A row pair is reported once per column pair and an exact record
/// always wins over a fuzzy one.
///
/// # Example
///
/// ```ignore
/// use colmatch_map::MatchEngine;
/// use colmatch_model::{FuzzyThreshold, MatchOptions};
///
/// let engine = MatchEngine::new(MatchOptions::fuzzy(FuzzyThreshold::new(20)?));
/// let run = engine.run(&people, &staff);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine {
    options: MatchOptions,
}

/// One cell of the right-hand column: raw value plus its key.
struct KeyedCell<'a> {
    raw: &'a str,
    key: String,
}

impl MatchEngine {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Compares every column of `left` with every column of `right`.
    ///
    /// Groups come out in column-pair order: all right columns for left column
    /// 0, then left column 1, and so on.
    pub fn run(&self, left: &Dataset, right: &Dataset) -> MatchRun {
        let mut groups = Vec::new();
        let mut column_pairs = 0usize;

        for column_a in 0..left.column_count() {
            for column_b in 0..right.column_count() {
                column_pairs += 1;
                if let Some(group) = self.match_columns(left, right, column_a, column_b) {
                    debug!(
                        header1 = %group.header1,
                        header2 = %group.header2,
                        records = group.len(),
                        "column pair matched"
                    );
                    groups.push(group);
                }
            }
        }

        let run = MatchRun {
            groups,
            column_pairs,
        };
        let summary = run.summary();
        info!(
            dataset1 = %left.name,
            dataset2 = %right.name,
            fuzzy = self.options.fuzzy,
            threshold = self.options.threshold.percent(),
            column_pairs = summary.column_pairs,
            groups = summary.groups,
            exact = summary.exact_matches,
            fuzzy_matches = summary.fuzzy_matches,
            "matching complete"
        );
        run
    }

    /// Compares a single column pair. Returns `None` when nothing matched or
    /// either column index is past the headers.
    pub fn match_columns(
        &self,
        left: &Dataset,
        right: &Dataset,
        column_a: usize,
        column_b: usize,
    ) -> Option<MatchGroup> {
        let header1 = left.header(column_a)?;
        let header2 = right.header(column_b)?;

        let records = self.collect_records(left, right, column_a, column_b);
        if records.is_empty() {
            return None;
        }
        Some(MatchGroup {
            dataset_a: left.name.clone(),
            dataset_b: right.name.clone(),
            header1: header1.to_string(),
            header2: header2.to_string(),
            column_a,
            column_b,
            matches: records,
        })
    }

    fn collect_records(
        &self,
        left: &Dataset,
        right: &Dataset,
        column_a: usize,
        column_b: usize,
    ) -> Vec<MatchRecord> {
        let right_cells: Vec<Option<KeyedCell<'_>>> = right
            .column(column_b)
            .map(|cell| {
                cell.map(|raw| KeyedCell {
                    raw,
                    key: normalize_key(raw),
                })
            })
            .collect();
        let index = ExactIndex::build(
            right_cells
                .iter()
                .enumerate()
                .filter_map(|(row, cell)| cell.as_ref().map(|cell| (row, cell.key.as_str()))),
        );
        trace!(column_a, column_b, distinct_keys = index.len(), "indexed right column");
        // Every right cell is blank or absent: neither pass can match.
        if index.is_empty() {
            return Vec::new();
        }

        // (left row, right row) pairs already reported for this column pair.
        let mut consumed: HashSet<(usize, usize)> = HashSet::new();
        let mut records = Vec::new();

        for (row_a, cell) in left.column(column_a).enumerate() {
            let Some(value_a) = cell else {
                continue;
            };
            let key_a = normalize_key(value_a);

            for &row_b in index.candidates(&key_a) {
                let Some(cell_b) = right_cells[row_b].as_ref() else {
                    continue;
                };
                if !consumed.insert((row_a, row_b)) {
                    continue;
                }
                records.push(MatchRecord::exact(
                    RowNumber::from_index(row_a),
                    RowNumber::from_index(row_b),
                    value_a,
                    cell_b.raw,
                ));
            }

            // Blank cells never pair up, not even with each other.
            if !self.options.fuzzy || key_a.is_empty() {
                continue;
            }
            for (row_b, cell_b) in right_cells.iter().enumerate() {
                let Some(cell_b) = cell_b else {
                    continue;
                };
                if cell_b.key.is_empty() || consumed.contains(&(row_a, row_b)) {
                    continue;
                }
                if keys_fuzzy_match(&key_a, &cell_b.key, self.options.threshold) {
                    consumed.insert((row_a, row_b));
                    records.push(MatchRecord::fuzzy(
                        RowNumber::from_index(row_a),
                        RowNumber::from_index(row_b),
                        value_a,
                        cell_b.raw,
                    ));
                }
            }
        }

        records
    }
}

/// Runs a [`MatchEngine`] with `options` and returns the groups.
pub fn match_datasets(left: &Dataset, right: &Dataset, options: &MatchOptions) -> Vec<MatchGroup> {
    MatchEngine::new(*options).run(left, right).into_groups()
}

#[cfg(test)]
mod tests {
    use colmatch_model::{DatasetName, FuzzyThreshold};

    use super::*;

    fn dataset(name: &str, headers: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            DatasetName::new(name).unwrap(),
            headers.iter().map(|h| (*h).to_string()).collect(),
        )
        .with_rows(
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn counts_every_column_pair() {
        let left = dataset("A", &["x", "y"], &[&["1", "2"]]);
        let right = dataset("B", &["p", "q", "r"], &[&["9", "9", "9"]]);
        let run = MatchEngine::default().run(&left, &right);
        assert_eq!(run.column_pairs, 6);
        assert!(run.is_empty());
    }

    #[test]
    fn out_of_range_columns_yield_nothing() {
        let left = dataset("A", &["x"], &[&["1"]]);
        let right = dataset("B", &["y"], &[&["1"]]);
        let engine = MatchEngine::default();
        assert!(engine.match_columns(&left, &right, 0, 0).is_some());
        assert!(engine.match_columns(&left, &right, 1, 0).is_none());
        assert!(engine.match_columns(&left, &right, 0, 5).is_none());
    }

    #[test]
    fn blank_right_column_yields_nothing() {
        let left = dataset("A", &["x"], &[&["a"], &[""]]);
        let right = dataset("B", &["y", "z"], &[&["", "a"], &["  "], &[]]);
        let engine = MatchEngine::new(MatchOptions::fuzzy(FuzzyThreshold::new(100).unwrap()));
        assert!(engine.match_columns(&left, &right, 0, 0).is_none());
        assert_eq!(engine.match_columns(&left, &right, 0, 1).map(|g| g.matches.len()), Some(1));
    }

    #[test]
    fn raw_values_are_reported_untouched() {
        let left = dataset("A", &["x"], &[&["  Alice "]]);
        let right = dataset("B", &["y"], &[&["ALICE"]]);
        let group = MatchEngine::default()
            .match_columns(&left, &right, 0, 0)
            .unwrap();
        assert_eq!(group.matches[0].value_a, "  Alice ");
        assert_eq!(group.matches[0].value_b, "ALICE");
    }

    #[test]
    fn fuzzy_pass_skips_pairs_found_exactly() {
        let left = dataset("A", &["x"], &[&["foo"]]);
        let right = dataset("B", &["y"], &[&["foo"], &["fob"]]);
        let engine = MatchEngine::new(MatchOptions::fuzzy(FuzzyThreshold::new(50).unwrap()));
        let group = engine.match_columns(&left, &right, 0, 0).unwrap();
        assert_eq!(group.len(), 2);
        assert!(!group.matches[0].fuzzy);
        assert_eq!(group.matches[0].row_b.get(), 2);
        assert!(group.matches[1].fuzzy);
        assert_eq!(group.matches[1].row_b.get(), 3);
    }
}
