//! Canonical comparison keys for cell values.

/// Normalizes a raw cell value into its comparison key.
///
/// Trims surrounding whitespace and lowercases. An empty key never takes part
/// in exact matching.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
