//! Health-check middleware for tower and axum services.
//!
//! [`HealthCheckLayer`] answers `GET`/`HEAD` requests to configured liveness,
//! readiness and startup paths directly, with `200 OK` or `503 Service
//! Unavailable` depending on the endpoint's probe. Everything else reaches the
//! wrapped service untouched.
//!
//! ```no_run
//! use axum::{Router, routing::get};
//! use probez::{HealthCheckLayer, HealthFlag};
//!
//! let ready = HealthFlag::unhealthy();
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "hello" }))
//!     .layer(
//!         HealthCheckLayer::builder()
//!             .endpoint_default_probe("/livez")
//!             .endpoint("/readyz", ready.probe())
//!             .into_layer(),
//!     );
//! ```

pub mod config;
pub mod endpoint;
pub mod health;
pub mod middleware;

pub use config::{HealthCheckBuilder, HealthCheckConfig};
pub use endpoint::{
    DEFAULT_LIVENESS_ENDPOINT, DEFAULT_READINESS_ENDPOINT, DEFAULT_STARTUP_ENDPOINT, Endpoint,
    Predicate, Probe, always_healthy,
};
pub use health::HealthFlag;
pub use middleware::{HealthCheck, HealthCheckLayer};
