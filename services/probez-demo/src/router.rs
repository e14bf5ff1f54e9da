use axum::{Router, http::HeaderName, http::request::Parts, routing::get};
use tower_http::trace::TraceLayer;

use probez::{
    DEFAULT_LIVENESS_ENDPOINT, DEFAULT_READINESS_ENDPOINT, DEFAULT_STARTUP_ENDPOINT,
    HealthCheckLayer,
};

use crate::middleware::{propagate_request_id_layer, request_id_layer};
use crate::state::AppState;

pub const INDEX_BODY: &str = "probez demo";

async fn index() -> &'static str {
    INDEX_BODY
}

/// Health endpoints backed by the lifecycle flags in `state`.
///
/// Liveness is always healthy. When `bypass_header` is set, requests carrying
/// it fall through to the application router.
pub fn health_layer(state: &AppState, bypass_header: Option<HeaderName>) -> HealthCheckLayer {
    let builder = HealthCheckLayer::builder()
        .endpoint_default_probe(DEFAULT_LIVENESS_ENDPOINT)
        .endpoint(DEFAULT_READINESS_ENDPOINT, state.readiness.probe())
        .endpoint(DEFAULT_STARTUP_ENDPOINT, state.startup.probe());

    match bypass_header {
        Some(header) => builder
            .next(move |parts: &Parts| parts.headers.contains_key(&header))
            .into_layer(),
        None => builder.into_layer(),
    }
}

pub fn build_router(state: &AppState, bypass_header: Option<HeaderName>) -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        // Outermost, so probes skip request ids and tracing.
        .layer(health_layer(state, bypass_header))
}
