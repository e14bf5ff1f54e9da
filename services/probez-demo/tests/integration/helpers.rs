use axum::http::HeaderName;
use axum_test::TestServer;

use probez_demo::router::build_router;
use probez_demo::state::AppState;

pub const BYPASS_HEADER: &str = "x-public-gateway";

/// Server over the demo router, plus the state driving its probes.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(&state, None)).unwrap()
}

pub fn test_server_with_bypass(state: AppState) -> TestServer {
    let router = build_router(&state, Some(HeaderName::from_static(BYPASS_HEADER)));
    TestServer::new(router).unwrap()
}
