use std::io;

use axum::http::header::InvalidHeaderName;

/// Demo service startup and runtime errors.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to load config from environment")]
    Config(#[from] envy::Error),
    #[error("invalid bypass header name {name:?}")]
    InvalidBypassHeader {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server error")]
    Serve(#[source] io::Error),
}

impl ServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::InvalidBypassHeader { .. } => "INVALID_BYPASS_HEADER",
            Self::Bind { .. } => "BIND",
            Self::Serve(_) => "SERVE",
        }
    }
}
