use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use kenteken_core::plate::normalize_plate;
use kenteken_listings::{listing_links, Listing};

use super::ApiError;

#[derive(Debug, Deserialize)]
pub(super) struct ListingsQuery {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ListingsResponse {
    kenteken: String,
    listings: Vec<Listing>,
    #[serde(rename = "hasListings")]
    has_listings: bool,
}

/// Marketplace search links for a plate. Purely generated; no availability
/// check runs, so `hasListings` is always false.
pub(super) async fn get_listing_links(
    Query(query): Query<ListingsQuery>,
) -> Result<Json<ListingsResponse>, ApiError> {
    let plate = query
        .plate
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::new("missing_parameter", "plate query parameter is required"))?;

    let normalized = normalize_plate(plate);
    let listings = listing_links(&normalized, query.brand.as_deref(), query.model.as_deref());

    Ok(Json(ListingsResponse {
        kenteken: normalized,
        listings,
        has_listings: false,
    }))
}
