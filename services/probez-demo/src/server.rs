use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::DemoConfig;
use crate::error::ServiceError;
use crate::router::build_router;
use crate::state::AppState;

/// Bind, warm up and serve until ctrl-c, then drain before closing.
pub async fn run(config: DemoConfig) -> Result<(), ServiceError> {
    let state = AppState::default();
    let router = build_router(&state, config.bypass_header()?);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("probez demo listening on {addr}");
    tokio::spawn(state.clone().warm_up(config.startup_delay()));

    axum::serve(listener, router)
        .with_graceful_shutdown(drain_after(ctrl_c(), state, config.shutdown_drain()))
        .await
        .map_err(ServiceError::Serve)
}

/// Resolves once `signal` fired and `drain` elapsed.
///
/// Readiness is off for the whole drain window while the listener keeps
/// accepting, so load balancers see `/readyz` fail before connections close.
pub async fn drain_after<F>(signal: F, state: AppState, drain: Duration)
where
    F: Future<Output = ()>,
{
    signal.await;
    state.begin_shutdown();
    info!(drain_ms = drain.as_millis() as u64, "draining before shutdown");
    tokio::time::sleep(drain).await;
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
