use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{Either, Ready, ready};
use http::header::{CONTENT_TYPE, HeaderValue};
use http::request::Parts;
use http::{Method, Request, Response, StatusCode};
use tower::{Layer, Service};
use tracing::{debug, trace};

use crate::config::{HealthCheckBuilder, HealthCheckConfig};

/// Layer that answers health-check paths before the wrapped service sees them.
///
/// Apply with `.layer(HealthCheckLayer::default())` in router. Every service
/// produced by this layer shares the same configuration.
#[derive(Clone, Debug, Default)]
pub struct HealthCheckLayer {
    config: Arc<HealthCheckConfig>,
}

impl HealthCheckLayer {
    pub fn new(config: HealthCheckConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn builder() -> HealthCheckBuilder {
        HealthCheckConfig::builder()
    }

    pub fn config(&self) -> &HealthCheckConfig {
        &self.config
    }
}

impl<S> Layer<S> for HealthCheckLayer {
    type Service = HealthCheck<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HealthCheck {
            inner,
            config: Arc::clone(&self.config),
        }
    }
}

/// Middleware service produced by [`HealthCheckLayer`].
///
/// A `GET` or `HEAD` request whose path matches a configured endpoint is
/// answered with `200 OK` or `503 Service Unavailable`, `Content-Type:
/// text/plain` and an empty body. Every other request goes to the inner
/// service unchanged.
#[derive(Clone, Debug)]
pub struct HealthCheck<S> {
    inner: S,
    config: Arc<HealthCheckConfig>,
}

impl<S> HealthCheck<S> {
    pub fn new(inner: S, config: HealthCheckConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HealthCheck<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Either<Ready<Result<Self::Response, Self::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let (parts, body) = req.into_parts();
        match intercept(&self.config, &parts) {
            Some(status) => Either::Left(ready(Ok(probe_response(status)))),
            None => Either::Right(self.inner.call(Request::from_parts(parts, body))),
        }
    }
}

/// Status to answer with, or `None` to hand the request to the inner service.
fn intercept(config: &HealthCheckConfig, parts: &Parts) -> Option<StatusCode> {
    let path = parts.uri.path();

    if config.should_skip(parts) {
        trace!(path, "health check bypassed");
        return None;
    }

    if parts.method != Method::GET && parts.method != Method::HEAD {
        return None;
    }

    let Some(endpoint) = config.find(path) else {
        trace!(path, "no health endpoint matched");
        return None;
    };

    let healthy = endpoint.check(parts);
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    debug!(
        path,
        endpoint = endpoint.path(),
        healthy,
        status = status.as_u16(),
        "health probe answered"
    );
    Some(status)
}

fn probe_response<B: Default>(status: StatusCode) -> Response<B> {
    let mut response = Response::new(B::default());
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}
