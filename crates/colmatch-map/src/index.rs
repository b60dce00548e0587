//! Lookup from normalized key to the rows of one column that carry it.

use std::collections::HashMap;

/// Exact-match index over a single column of the right-hand dataset.
///
/// Rows are stored as zero-based indices in ascending order. Empty keys are
/// never indexed.
#[derive(Debug, Default)]
pub struct ExactIndex<'k> {
    rows: HashMap<&'k str, Vec<usize>>,
}

impl<'k> ExactIndex<'k> {
    /// Builds the index from `(row, key)` pairs.
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'k str)>,
    {
        let mut rows: HashMap<&'k str, Vec<usize>> = HashMap::new();
        for (row, key) in keys {
            if key.is_empty() {
                continue;
            }
            rows.entry(key).or_default().push(row);
        }
        Self { rows }
    }

    /// Every row sharing `key`, in row order. Empty for unknown or empty keys.
    pub fn candidates(&self, key: &str) -> &[usize] {
        self.rows.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
