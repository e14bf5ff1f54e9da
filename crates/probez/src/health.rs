use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use http::request::Parts;

/// Shared on/off health switch for probes driven by application state.
///
/// Clones observe the same flag, so one handle can live in the probe while the
/// application flips another (e.g. readiness after warm-up, back to unhealthy
/// on shutdown).
#[derive(Clone, Debug, Default)]
pub struct HealthFlag(Arc<AtomicBool>);

impl HealthFlag {
    pub fn new(healthy: bool) -> Self {
        Self(Arc::new(AtomicBool::new(healthy)))
    }

    pub fn healthy() -> Self {
        Self::new(true)
    }

    pub fn unhealthy() -> Self {
        Self::new(false)
    }

    pub fn set_healthy(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn set_unhealthy(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_healthy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Probe reading this flag on every request.
    pub fn probe(&self) -> impl Fn(&Parts) -> bool + Send + Sync + 'static {
        let flag = self.clone();
        move |_: &Parts| flag.is_healthy()
    }
}
