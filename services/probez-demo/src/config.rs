use std::time::Duration;

use axum::http::HeaderName;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ServiceError;

/// Prefix shared by every demo environment variable.
pub const ENV_PREFIX: &str = "PROBEZ_";

/// Trait for loading service configuration from `PROBEZ_`-prefixed environment variables.
pub trait Config: Sized + DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(pairs)
    }
}

/// Demo service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// TCP port for the HTTP server (default 3110). Env var: `PROBEZ_PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Warm-up before startup and readiness report healthy (default 2000).
    /// Env var: `PROBEZ_STARTUP_DELAY_MS`.
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,
    /// Time `/readyz` answers 503 after ctrl-c before the listener closes
    /// (default 5000). Env var: `PROBEZ_SHUTDOWN_DRAIN_MS`.
    #[serde(default = "default_shutdown_drain_ms")]
    pub shutdown_drain_ms: u64,
    /// Requests carrying this header skip health interception.
    /// Env var: `PROBEZ_BYPASS_HEADER`.
    #[serde(default)]
    pub bypass_header: Option<String>,
}

impl Config for DemoConfig {}

impl DemoConfig {
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn shutdown_drain(&self) -> Duration {
        Duration::from_millis(self.shutdown_drain_ms)
    }

    pub fn bypass_header(&self) -> Result<Option<HeaderName>, ServiceError> {
        self.bypass_header
            .as_deref()
            .map(|name| {
                HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
                    ServiceError::InvalidBypassHeader {
                        name: name.to_owned(),
                        source,
                    }
                })
            })
            .transpose()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            startup_delay_ms: default_startup_delay_ms(),
            shutdown_drain_ms: default_shutdown_drain_ms(),
            bypass_header: None,
        }
    }
}

fn default_port() -> u16 {
    3110
}

fn default_startup_delay_ms() -> u64 {
    2000
}

fn default_shutdown_drain_ms() -> u64 {
    5000
}
