//! Demo service showing `probez` installed in front of an axum application.

pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;
pub mod telemetry;
