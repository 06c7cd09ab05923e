mod listings;
mod vehicles;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use kenteken_rdw::{RdwClient, RdwError};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub rdw: RdwClient,
}

/// JSON error body: `{"error": {"code", "message"}}`. The code decides the
/// HTTP status.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "missing_parameter" | "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Converts a registry client failure into the generic upstream error.
///
/// Everything the client can fail with at request time — transport errors,
/// non-2xx statuses, malformed bodies — is logged with the request ID and
/// collapsed into one user-facing message. No retry.
pub(super) fn map_rdw_error(request_id: &str, error: &RdwError) -> ApiError {
    if matches!(error, RdwError::EmptyQuery) {
        return ApiError::new("bad_request", "at least one search term is required");
    }
    tracing::error!(request_id, error = %error, "registry request failed");
    ApiError::new("upstream_error", "failed to fetch vehicle data")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/vehicles", get(vehicles::get_vehicle))
        .route("/api/v1/vehicles/search", get(vehicles::search_vehicles))
        .route("/api/v1/listings", get(listings::get_listing_links))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}
