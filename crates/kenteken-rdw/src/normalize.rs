//! Display helpers for raw registry field values.

use chrono::NaiveDate;

/// Parses a registry `YYYYMMDD` date string into a [`NaiveDate`].
///
/// Returns `None` if the string does not match the expected format.
#[must_use]
pub fn parse_rdw_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d").ok()
}
