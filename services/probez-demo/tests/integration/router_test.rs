use axum::http::{HeaderName, HeaderValue, Method, StatusCode};

use probez_demo::middleware::REQUEST_ID_HEADER;
use probez_demo::router::INDEX_BODY;
use probez_demo::state::AppState;

use crate::helpers::{BYPASS_HEADER, test_server, test_server_with_bypass};

#[tokio::test]
async fn should_serve_application_route() {
    let server = test_server(AppState::started());

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text(INDEX_BODY);
}

#[tokio::test]
async fn application_routes_get_request_id() {
    let server = test_server(AppState::started());

    let response = server.get("/").await;

    let id = response.header(REQUEST_ID_HEADER);
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn probes_skip_application_middleware() {
    let server = test_server(AppState::started());

    let response = server.get("/livez").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "text/plain");
    assert!(
        response
            .headers()
            .get(REQUEST_ID_HEADER)
            .is_none()
    );
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn should_answer_head_probes() {
    let server = test_server(AppState::started());

    server.method(Method::HEAD, "/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_delegate_post_to_probe_path() {
    let server = test_server(AppState::started());

    server
        .post("/livez")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_delegate_unknown_path() {
    let server = test_server(AppState::started());

    server
        .get("/healthz")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bypass_header_skips_probes() {
    let server = test_server_with_bypass(AppState::started());

    server
        .get("/livez")
        .add_header(
            HeaderName::from_static(BYPASS_HEADER),
            HeaderValue::from_static("1"),
        )
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server.get("/livez").await.assert_status_ok();
}
