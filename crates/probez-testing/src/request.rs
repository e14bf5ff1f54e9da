//! Request builders for driving a router with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use http::{Method, Request};

/// Build an empty-bodied request.
pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn get(path: &str) -> Request<Body> {
    request(Method::GET, path)
}

pub fn head(path: &str) -> Request<Body> {
    request(Method::HEAD, path)
}
