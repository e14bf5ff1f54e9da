use std::fmt;
use std::sync::Arc;

use http::request::Parts;

use crate::endpoint::{
    DEFAULT_LIVENESS_ENDPOINT, DEFAULT_READINESS_ENDPOINT, DEFAULT_STARTUP_ENDPOINT, Endpoint,
    Predicate, always_healthy,
};
use crate::middleware::HealthCheckLayer;

/// Immutable health-check configuration shared by every clone of the middleware.
///
/// Built once through [`HealthCheckBuilder`]. If the builder registered no
/// endpoint, `/livez`, `/readyz` and `/startupz` are installed with
/// [`always_healthy`] probes. Registering even one endpoint suppresses all three.
#[derive(Clone)]
pub struct HealthCheckConfig {
    endpoints: Vec<Endpoint>,
    next: Option<Predicate>,
}

impl HealthCheckConfig {
    pub fn builder() -> HealthCheckBuilder {
        HealthCheckBuilder::default()
    }

    /// Endpoints in registration order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Whether a bypass predicate was configured.
    ///
    /// Part of the inspection API alongside [`endpoints`](Self::endpoints), for
    /// hosts that log or assert on the installed configuration.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether the bypass predicate is set and returns `true` for this request.
    pub fn should_skip(&self, parts: &Parts) -> bool {
        self.next.as_ref().is_some_and(|next| next(parts))
    }

    /// First endpoint matching `path`, after dropping a single trailing `/`.
    pub fn find(&self, path: &str) -> Option<&Endpoint> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        self.endpoints.iter().find(|e| e.matches(trimmed))
    }
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        HealthCheckBuilder::default().build()
    }
}

impl fmt::Debug for HealthCheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthCheckConfig")
            .field("endpoints", &self.endpoints)
            .field("next", &self.has_next())
            .finish()
    }
}

/// Collects endpoints and the bypass predicate in call order.
///
/// Endpoint calls append, so duplicate paths are accepted; only the first one
/// registered is ever matched.
#[derive(Default)]
pub struct HealthCheckBuilder {
    endpoints: Vec<Endpoint>,
    next: Option<Predicate>,
}

impl HealthCheckBuilder {
    /// Register `path` with a probe that always reports healthy.
    pub fn endpoint_default_probe(mut self, path: impl Into<String>) -> Self {
        self.endpoints.push(Endpoint::new(path, always_healthy()));
        self
    }

    /// Register `path` with a caller-supplied probe.
    pub fn endpoint<F>(mut self, path: impl Into<String>, probe: F) -> Self
    where
        F: Fn(&Parts) -> bool + Send + Sync + 'static,
    {
        self.endpoints.push(Endpoint::new(path, Arc::new(probe)));
        self
    }

    /// Skip health-check handling for requests where `predicate` returns `true`.
    ///
    /// Calling this again replaces the previous predicate.
    pub fn next<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Parts) -> bool + Send + Sync + 'static,
    {
        self.next = Some(Arc::new(predicate));
        self
    }

    pub fn build(self) -> HealthCheckConfig {
        let mut endpoints = self.endpoints;
        if endpoints.is_empty() {
            endpoints = vec![
                Endpoint::new(DEFAULT_LIVENESS_ENDPOINT, always_healthy()),
                Endpoint::new(DEFAULT_READINESS_ENDPOINT, always_healthy()),
                Endpoint::new(DEFAULT_STARTUP_ENDPOINT, always_healthy()),
            ];
        }

        HealthCheckConfig {
            endpoints,
            next: self.next,
        }
    }

    pub fn into_layer(self) -> HealthCheckLayer {
        HealthCheckLayer::new(self.build())
    }
}
