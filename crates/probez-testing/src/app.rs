//! Downstream application used behind the health-check layer in tests.

use axum::{Router, routing::get};

/// Body returned by `GET /` on [`fallback_app`].
pub const FALLBACK_BODY: &str = "Hello World";

/// Router with only `GET /`; every other request answers 404 (405 for other methods on `/`).
pub fn fallback_app() -> Router {
    Router::new().route("/", get(|| async { FALLBACK_BODY }))
}
