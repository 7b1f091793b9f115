use thiserror::Error;

/// An error that occurred while doing
/// a request to the REST server.
/// Never propagated past the resource client,
/// instead routed to the configured fail handler.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request failed.
    #[error("The request failed to be sent.")]
    Request,
    /// Http-like status codes.
    #[error("The server responded with status code {0}")]
    Status(u16),
    /// Other errors
    #[error("{0}")]
    Other(anyhow::Error),
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Other(value.into())
    }
}
