//! License-plate normalization.
//!
//! The registry stores plates without separators, while users type them with
//! dashes in arbitrary positions (`91-RFH-93`, `L-590-PX`). All comparisons
//! go through [`normalize_plate`] so dash placement never affects matching.

/// Normalizes a plate for lookup and comparison: strips dash separators and
/// uppercases the rest.
#[must_use]
pub fn normalize_plate(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_uppercase()
}
