//! Options controlling a matching run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Allowed edit distance as a percentage of the longer key (0 to 100).
///
/// `0` accepts identical keys only, `100` accepts any two non-empty keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct FuzzyThreshold(u8);

impl FuzzyThreshold {
    pub const MAX: u8 = 100;

    /// Builds a threshold, rejecting values outside `0..=100`.
    pub fn new(percent: i64) -> Result<Self, ModelError> {
        u8::try_from(percent)
            .ok()
            .filter(|value| *value <= Self::MAX)
            .map(Self)
            .ok_or(ModelError::ThresholdOutOfRange(percent))
    }

    /// Builds a threshold, clamping values outside `0..=100` to the nearest bound.
    pub fn clamped(percent: i64) -> Self {
        Self(percent.clamp(0, i64::from(Self::MAX)) as u8)
    }

    pub fn percent(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for FuzzyThreshold {
    fn default() -> Self {
        Self(20)
    }
}

impl TryFrom<i64> for FuzzyThreshold {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FuzzyThreshold> for u32 {
    fn from(value: FuzzyThreshold) -> Self {
        value.percent()
    }
}

impl fmt::Display for FuzzyThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Options for a single comparison request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Run the approximate pass after the exact pass.
    #[serde(rename = "useFuzzy")]
    pub fuzzy: bool,

    /// Threshold applied by the approximate pass.
    #[serde(rename = "fuzzyThreshold")]
    pub threshold: FuzzyThreshold,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact matching only.
    pub fn exact_only() -> Self {
        Self {
            fuzzy: false,
            ..Self::default()
        }
    }

    /// Exact matching followed by approximate matching at `threshold`.
    pub fn fuzzy(threshold: FuzzyThreshold) -> Self {
        Self {
            fuzzy: true,
            threshold,
        }
    }

    pub fn with_fuzzy(mut self, enable: bool) -> Self {
        self.fuzzy = enable;
        self
    }

    pub fn with_threshold(mut self, threshold: FuzzyThreshold) -> Self {
        self.threshold = threshold;
        self
    }
}
