pub mod dataset;
pub mod error;
pub mod ids;
pub mod matching;
pub mod options;

pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use ids::{DatasetName, RowNumber};
pub use matching::{MatchGroup, MatchKind, MatchRecord, MatchSummary};
pub use options::{FuzzyThreshold, MatchOptions};
