use crate::server::state::ApiState;
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use ihub_domain::constants::SYSTEM_TAG;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    /// Status
    status: &'static str,
    /// Version
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
    /// Whether SVG→PNG rasterization was compiled in
    raster_available: bool,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[utoipa::path(
    get,
    path = "/",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
        raster_available: state.capabilities.raster,
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
