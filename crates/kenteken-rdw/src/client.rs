//! HTTP client for the RDW open-data registry.
//!
//! Wraps `reqwest` with registry-specific error handling and query
//! construction. One method per lookup mode: [`RdwClient::get_vehicle`] for
//! exact plate resolution, [`RdwClient::search_vehicles`] for multi-term
//! substring search with match annotation.

use std::time::Duration;

use kenteken_core::plate::normalize_plate;
use kenteken_core::terms::SearchTerm;
use reqwest::{Client, Url};

use crate::error::RdwError;
use crate::query::{match_terms, plate_where_any};
use crate::types::{AnnotatedVehicle, SearchOutcome, VehicleRecord};

/// Production endpoint of the licensed-vehicles dataset.
pub const DEFAULT_BASE_URL: &str = "https://opendata.rdw.nl/resource/m9d7-ebf2.json";

/// Row cap applied to every pattern search. Above this many matches the
/// result list is truncated, not exhaustive.
pub const SEARCH_LIMIT: u32 = 100;

/// Client for the RDW vehicle registry.
///
/// Use [`RdwClient::new`] for production or [`RdwClient::with_base_url`] to
/// point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct RdwClient {
    client: Client,
    base_url: Url,
}

impl RdwClient {
    /// Creates a client pointed at the production registry endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RdwError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, RdwError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RdwError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`RdwError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, RdwError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("kenteken/0.1 (vehicle-lookup)")
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| RdwError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Resolves a plate to its registry row.
    ///
    /// The input is normalized (dashes stripped, uppercased) before the
    /// lookup, so `"91-rfh-93"` and `"91RFH93"` hit the same row. Returns
    /// `Ok(None)` when the registry has no row for the plate. Should the
    /// registry ever return more than one row, the surplus is logged and the
    /// first row wins.
    ///
    /// # Errors
    ///
    /// - [`RdwError::Http`] on network failure or a non-2xx HTTP status.
    /// - [`RdwError::Deserialize`] if the response body is not a JSON array
    ///   of records.
    pub async fn get_vehicle(&self, plate: &str) -> Result<Option<VehicleRecord>, RdwError> {
        let normalized = normalize_plate(plate);
        let url = self.build_url(&[("kenteken", &normalized)]);
        let rows: Vec<VehicleRecord> = self.request_json(&url).await?;

        if rows.len() > 1 {
            tracing::warn!(
                plate = %normalized,
                rows = rows.len(),
                "registry returned multiple rows for one plate; using the first"
            );
        }

        Ok(rows.into_iter().next())
    }

    /// Runs a multi-term substring search against normalized plates.
    ///
    /// Builds a single OR-joined `$where` filter over all terms, capped at
    /// [`SEARCH_LIMIT`] rows and ordered by plate ascending, then annotates
    /// every returned row with the subset of terms found in its plate.
    ///
    /// # Errors
    ///
    /// - [`RdwError::EmptyQuery`] if `terms` is empty; no request is made.
    /// - [`RdwError::Http`] on network failure or a non-2xx HTTP status.
    /// - [`RdwError::Deserialize`] if the response body is not a JSON array
    ///   of records.
    pub async fn search_vehicles(&self, terms: &[SearchTerm]) -> Result<SearchOutcome, RdwError> {
        if terms.is_empty() {
            return Err(RdwError::EmptyQuery);
        }

        let filter = plate_where_any(terms);
        let limit = SEARCH_LIMIT.to_string();
        let url = self.build_url(&[
            ("$where", filter.as_str()),
            ("$limit", limit.as_str()),
            ("$order", "kenteken"),
        ]);
        let rows: Vec<VehicleRecord> = self.request_json(&url).await?;

        let results: Vec<AnnotatedVehicle> = rows
            .into_iter()
            .map(|record| {
                let matched_terms = match_terms(record.plate(), terms);
                AnnotatedVehicle {
                    record,
                    matched_terms,
                }
            })
            .collect();

        let count = results.len();
        let search_terms = terms.iter().map(|t| t.as_str().to_owned()).collect();

        Ok(SearchOutcome {
            results,
            count,
            search_terms,
        })
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json<T: serde::de::DeserializeOwned>(&self, url: &Url) -> Result<T, RdwError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RdwError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
