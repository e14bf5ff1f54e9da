use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use probez::HealthCheckLayer;
use probez_testing::fallback_app;

/// Fallback app wrapped by `layer`, installed the way a host router would.
pub fn app(layer: HealthCheckLayer) -> Router {
    fallback_app().layer(layer)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn status(app: &Router, req: Request<Body>) -> StatusCode {
    send(app, req).await.status()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a response was produced by the health-check layer.
pub async fn assert_probe_response(resp: Response<Body>, expected: StatusCode) {
    assert_eq!(resp.status(), expected);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/plain");
    assert_eq!(body_string(resp).await, "");
}
