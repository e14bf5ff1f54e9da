use std::fmt;
use std::sync::Arc;

use http::request::Parts;

/// Liveness path installed when no endpoint is configured.
pub const DEFAULT_LIVENESS_ENDPOINT: &str = "/livez";
/// Readiness path installed when no endpoint is configured.
pub const DEFAULT_READINESS_ENDPOINT: &str = "/readyz";
/// Startup path installed when no endpoint is configured.
pub const DEFAULT_STARTUP_ENDPOINT: &str = "/startupz";

/// Health probe: `true` answers `200 OK`, `false` answers `503 Service Unavailable`.
///
/// Runs synchronously on the request path, so it must return promptly.
pub type Probe = Arc<dyn Fn(&Parts) -> bool + Send + Sync>;

/// Bypass predicate: `true` skips health-check handling for the request.
pub type Predicate = Arc<dyn Fn(&Parts) -> bool + Send + Sync>;

/// Probe that always reports healthy.
pub fn always_healthy() -> Probe {
    Arc::new(|_: &Parts| true)
}

/// A health-check path bound to its probe.
#[derive(Clone)]
pub struct Endpoint {
    path: String,
    probe: Probe,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, probe: Probe) -> Self {
        Self {
            path: path.into(),
            probe,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Case-insensitive comparison against an already trimmed request path.
    ///
    /// Folds Unicode case, so `/ZDROWIE-Ś` matches `/zdrowie-ś`.
    pub fn matches(&self, trimmed_path: &str) -> bool {
        self.path.eq_ignore_ascii_case(trimmed_path) || fold(&self.path).eq(fold(trimmed_path))
    }

    /// Invoke the probe for this request.
    pub fn check(&self, parts: &Parts) -> bool {
        (self.probe)(parts)
    }
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
