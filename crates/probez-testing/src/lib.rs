//! Test utilities for probez.
//!
//! Provides request builders, a fallback application router and counting probes.
//! Import in `#[cfg(test)]` blocks and integration tests only, never in production code.

pub mod app;
pub mod probe;
pub mod request;

pub use app::{FALLBACK_BODY, fallback_app};
pub use probe::CountingProbe;
pub use request::{get, head, request};
