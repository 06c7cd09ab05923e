//! Registry response types.
//!
//! The licensed-vehicles dataset is loosely typed: every column is a string
//! and the set of columns present varies per vehicle kind, so rows are kept
//! as an open field map rather than a fixed struct. Nothing here is owned or
//! mutated locally; records are a read-only projection of the upstream
//! response.

use kenteken_core::plate::normalize_plate;
use serde::{Deserialize, Serialize};

/// A single vehicle row as returned by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleRecord(pub serde_json::Map<String, serde_json::Value>);

impl VehicleRecord {
    /// Returns a field as a string slice, if present and a JSON string.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(serde_json::Value::as_str)
    }

    /// The raw plate identifier (`kenteken` column), empty when absent.
    #[must_use]
    pub fn plate(&self) -> &str {
        self.field("kenteken").unwrap_or("")
    }

    /// Dash-stripped, uppercased plate used for matching.
    #[must_use]
    pub fn normalized_plate(&self) -> String {
        normalize_plate(self.plate())
    }
}

/// A vehicle row annotated with the search terms found in its plate.
///
/// The annotation is derived at query time and never persisted; the upstream
/// OR-filter cannot report which clause matched a row, so the subset is
/// recomputed locally.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedVehicle {
    #[serde(flatten)]
    pub record: VehicleRecord,
    #[serde(rename = "matchedTerms")]
    pub matched_terms: Vec<String>,
}

/// Result of a pattern search.
///
/// `results` holds at most [`crate::SEARCH_LIMIT`] rows — the upstream query
/// is capped, so above that many matches the list is truncated, not
/// exhaustive. `search_terms` echoes the normalized input terms.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<AnnotatedVehicle>,
    pub count: usize,
    #[serde(rename = "searchTerms")]
    pub search_terms: Vec<String>,
}
