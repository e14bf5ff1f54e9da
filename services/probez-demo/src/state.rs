use std::time::Duration;

use probez::HealthFlag;
use tracing::info;

/// Health flags shared between the probes and the service lifecycle.
///
/// Startup and readiness begin unhealthy. Warm-up turns both on; shutdown turns
/// readiness off again so load balancers drain the instance.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub startup: HealthFlag,
    pub readiness: HealthFlag,
}

impl AppState {
    /// State of an instance that finished starting.
    pub fn started() -> Self {
        let state = Self::default();
        state.mark_started();
        state
    }

    pub fn mark_started(&self) {
        self.startup.set_healthy();
        self.readiness.set_healthy();
        info!("startup complete, accepting traffic");
    }

    pub async fn warm_up(self, delay: Duration) {
        tokio::time::sleep(delay).await;
        self.mark_started();
    }

    pub fn begin_shutdown(&self) {
        self.readiness.set_unhealthy();
        info!("shutdown requested, readiness disabled");
    }
}
