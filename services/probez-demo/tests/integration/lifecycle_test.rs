use axum::http::StatusCode;

use probez_demo::state::AppState;

use crate::helpers::test_server;

#[tokio::test]
async fn should_report_not_started_before_warm_up() {
    let server = test_server(AppState::default());

    server.get("/livez").await.assert_status_ok();
    server
        .get("/startupz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_report_ready_after_start() {
    let state = AppState::default();
    let server = test_server(state.clone());

    state.mark_started();

    server.get("/startupz").await.assert_status_ok();
    server.get("/readyz/").await.assert_status_ok();
}

#[tokio::test]
async fn should_drain_on_shutdown() {
    let state = AppState::started();
    let server = test_server(state.clone());

    server.get("/readyz").await.assert_status_ok();

    state.begin_shutdown();

    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    server.get("/startupz").await.assert_status_ok();
    server.get("/livez").await.assert_status_ok();
}
