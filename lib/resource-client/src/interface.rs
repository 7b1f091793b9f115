use std::fmt::Debug;

use async_trait::async_trait;

use crate::errors::RequestError;

/// An io interface for the resource client to abstract away
/// the _actual_ HTTP client used to communicate
/// with the REST server.
///
/// Implementations resolve `path` against whatever base URL
/// they were configured with and return the raw response body.
/// Non-success status codes are reported as [`RequestError::Status`].
#[async_trait]
pub trait Http: Debug + Sync + Send {
    /// Requests the entity at the given path.
    /// Receives the response body as arbitrary data.
    async fn get(&self, path: &str) -> anyhow::Result<Vec<u8>, RequestError>;
    /// Submits arbitrary data to the given path to create an entity.
    /// Receives the response body as arbitrary data.
    async fn post(&self, path: &str, body: Vec<u8>) -> anyhow::Result<Vec<u8>, RequestError>;
    /// Submits arbitrary data to the given path to replace an entity.
    /// Receives the response body as arbitrary data.
    async fn put(&self, path: &str, body: Vec<u8>) -> anyhow::Result<Vec<u8>, RequestError>;
    /// Requests the deletion of the entity at the given path.
    /// Receives the response body as arbitrary data.
    async fn delete(&self, path: &str) -> anyhow::Result<Vec<u8>, RequestError>;
}
