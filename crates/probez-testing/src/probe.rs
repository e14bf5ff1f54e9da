//! Probes that record how often they were invoked.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use http::request::Parts;

/// Probe with a settable result and an invocation counter.
///
/// Clones share both, so keep one handle for assertions and pass
/// [`CountingProbe::probe`] to the builder.
#[derive(Clone, Debug)]
pub struct CountingProbe {
    healthy: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl CountingProbe {
    pub fn new(healthy: bool) -> Self {
        Self {
            healthy: Arc::new(AtomicBool::new(healthy)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Number of times the probe ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn probe(&self) -> impl Fn(&Parts) -> bool + Send + Sync + 'static {
        let this = self.clone();
        move |_: &Parts| {
            this.calls.fetch_add(1, Ordering::SeqCst);
            this.healthy.load(Ordering::SeqCst)
        }
    }
}
