//! Search-term parsing for plate pattern search.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// A single search token: trimmed, uppercased, guaranteed non-empty.
///
/// The term keeps any dashes the user typed (they are echoed back verbatim in
/// responses); [`SearchTerm::matchable`] yields the dash-stripped form used
/// for substring matching against normalized plates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Parses one raw token. Returns `None` when nothing remains after
    /// trimming.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = raw.trim().to_uppercase();
        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dash-stripped form compared against normalized plates.
    #[must_use]
    pub fn matchable(&self) -> String {
        self.0.chars().filter(|c| *c != '-').collect()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a comma-separated list into terms.
///
/// Empty tokens are dropped and duplicates are removed case-insensitively,
/// keeping the first occurrence in input order.
#[must_use]
pub fn parse_terms(raw: &str) -> Vec<SearchTerm> {
    let mut seen = HashSet::new();
    raw.split(',')
        .filter_map(SearchTerm::parse)
        .filter(|term| seen.insert(term.as_str().to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_uppercases() {
        let term = SearchTerm::parse("  rfh ").expect("non-empty term");
        assert_eq!(term.as_str(), "RFH");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(SearchTerm::parse(""), None);
        assert_eq!(SearchTerm::parse("   "), None);
    }

    #[test]
    fn matchable_strips_dashes_only() {
        let term = SearchTerm::parse("91-RFH").expect("non-empty term");
        assert_eq!(term.as_str(), "91-RFH");
        assert_eq!(term.matchable(), "91RFH");
    }

    #[test]
    fn parse_terms_splits_on_commas() {
        let terms = parse_terms("91,rfh, x ");
        let raw: Vec<&str> = terms.iter().map(SearchTerm::as_str).collect();
        assert_eq!(raw, vec!["91", "RFH", "X"]);
    }

    #[test]
    fn parse_terms_drops_empty_tokens() {
        let terms = parse_terms(" , ,91,,");
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].as_str(), "91");
    }

    #[test]
    fn parse_terms_dedups_case_insensitively() {
        let terms = parse_terms("rfh,RFH,Rfh,91");
        let raw: Vec<&str> = terms.iter().map(SearchTerm::as_str).collect();
        assert_eq!(raw, vec!["RFH", "91"]);
    }

    #[test]
    fn parse_terms_all_blank_yields_nothing() {
        assert!(parse_terms(" , , ").is_empty());
    }
}
