//! Column-pair matching between two tabular datasets.
//!
//! Every column of the left dataset is compared with every column of the
//! right dataset. Cells match exactly when their normalized keys (trimmed,
//! lowercased) are equal and non-empty, and approximately when their
//! Levenshtein distance is within a percentage of the longer key.
//!
//! - [`normalize_key`]: comparison key for a raw cell
//! - [`levenshtein`]: edit distance with linear working memory
//! - [`is_fuzzy_match`]: threshold rule in integer arithmetic
//! - [`ExactIndex`]: key to rows lookup for one column
//! - [`MatchEngine`]: runs all column pairs and builds match groups

#![deny(unsafe_code)]

pub mod distance;
pub mod engine;
pub mod fuzzy;
pub mod index;
pub mod normalize;

pub use distance::levenshtein;
pub use engine::{MatchEngine, MatchRun, match_datasets};
pub use fuzzy::{is_fuzzy_match, keys_fuzzy_match};
pub use index::ExactIndex;
pub use normalize::normalize_key;
