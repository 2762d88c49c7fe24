pub mod http;

use async_trait::async_trait;
use repix_model::{ResizeRequest, ResultSet};
use reqwest::StatusCode;
use thiserror::Error;

pub use http::HttpResizeService;

/// What can go wrong between accepting a request and holding its results.
///
/// The submission path collapses every variant into one user-facing
/// failure; the distinctions exist for the logs.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service was never reached, or the connection died under us.
    #[error("transport failure reaching the resize service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("resize service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The service claimed success but the body was not the agreed shape.
    #[error("resize service reply could not be parsed: {source}")]
    MalformedReply {
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be encoded.
    #[error("failed to encode request payload: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// The remote resize service as the client sees it: one call, one reply.
///
/// Implementations decide transport and endpoint shape. The request they
/// receive is already validated; its target set is never empty.
#[async_trait]
pub trait ResizeService: Send + Sync {
    async fn resize(&self, request: &ResizeRequest) -> Result<ResultSet, ServiceError>;
}
