//! `$where` expression construction for plate pattern search.
//!
//! The registry filters with a SQL-like string expression, which makes the
//! query injection-prone if literals are interpolated ad hoc. The expression
//! is assembled here from per-term clauses, with literal escaping isolated in
//! [`escape_literal`]. The finished expression is handed to the URL layer as
//! a query-pair value, so percent-encoding is never done by hand either.

use kenteken_core::plate::normalize_plate;
use kenteken_core::terms::SearchTerm;

/// Escapes a string literal for embedding in a `$where` expression by
/// doubling embedded single quotes: `O'BRIEN` becomes `O''BRIEN`.
#[must_use]
pub fn escape_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// One `plate contains term` clause.
///
/// The plate column is dash-stripped and uppercased at query time so dash
/// placement on either side never affects matching.
fn contains_clause(term: &SearchTerm) -> String {
    let literal = escape_literal(&term.matchable());
    format!("UPPER(REPLACE(kenteken, '-', '')) LIKE '%{literal}%'")
}

/// Combines one clause per term with `OR`: a row matches when any term is a
/// substring of its normalized plate.
#[must_use]
pub fn plate_where_any(terms: &[SearchTerm]) -> String {
    terms
        .iter()
        .map(contains_clause)
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Recomputes which of `terms` occur as substrings of `plate` (normalized).
///
/// Terms that are substrings of each other (`"9"` and `"91"`) are tested
/// independently; both can appear in the result.
#[must_use]
pub fn match_terms(plate: &str, terms: &[SearchTerm]) -> Vec<String> {
    let normalized = normalize_plate(plate);
    terms
        .iter()
        .filter(|term| normalized.contains(&term.matchable()))
        .map(|term| term.as_str().to_owned())
        .collect()
}
