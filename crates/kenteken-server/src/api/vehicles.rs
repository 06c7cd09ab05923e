use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use kenteken_core::terms::parse_terms;
use kenteken_rdw::{SearchOutcome, VehicleRecord};

use crate::middleware::RequestId;

use super::{map_rdw_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct VehicleQuery {
    pub plate: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub terms: Option<String>,
}

/// Exact lookup: resolves one plate to its registry row.
///
/// A plate with no registry row is a 404, never an empty 200.
pub(super) async fn get_vehicle(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<VehicleQuery>,
) -> Result<Json<VehicleRecord>, ApiError> {
    let plate = query
        .plate
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::new("missing_parameter", "plate query parameter is required"))?;

    match state.rdw.get_vehicle(plate).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(ApiError::new(
            "not_found",
            "no vehicle found for this plate",
        )),
        Err(e) => Err(map_rdw_error(&req_id.0, &e)),
    }
}

/// Pattern search: comma-separated terms, OR-matched as substrings of
/// normalized plates.
///
/// Zero usable terms is a 400 before any upstream call; zero hits is a soft
/// condition and comes back as a 200 with `count: 0`.
pub(super) async fn search_vehicles(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchOutcome>, ApiError> {
    let raw = query
        .terms
        .ok_or_else(|| ApiError::new("missing_parameter", "terms query parameter is required"))?;

    let terms = parse_terms(&raw);
    if terms.is_empty() {
        return Err(ApiError::new(
            "bad_request",
            "at least one non-empty search term is required",
        ));
    }

    match state.rdw.search_vehicles(&terms).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => Err(map_rdw_error(&req_id.0, &e)),
    }
}
