use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use resource_client::{errors::RequestError, interface::Http};
use url::Url;

/// An [`Http`] implementation backed by a [`reqwest::Client`].
///
/// Request paths are resolved against the base URL given at
/// construction. TLS, timeouts and further transport settings
/// are whatever the default reqwest client uses.
#[derive(Debug)]
pub struct HttpReqwest {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpReqwest {
    /// Creates the client with the given base URL.
    pub fn new(base_url: Url) -> anyhow::Result<Self> {
        Ok(Self {
            base_url,
            http: reqwest::ClientBuilder::new().build()?,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url, RequestError> {
        self.base_url
            .join(path)
            .map_err(|err| RequestError::Other(err.into()))
    }
}

#[async_trait]
impl Http for HttpReqwest {
    async fn get(&self, path: &str) -> anyhow::Result<Vec<u8>, RequestError> {
        let res = self.http.get(self.url(path)?).send().await.map_err(|err| {
            if err.is_request() {
                RequestError::Request
            } else {
                RequestError::Other(err.into())
            }
        })?;
        if !res.status().is_success() {
            return Err(RequestError::Status(res.status().as_u16()));
        }
        Ok(res
            .bytes()
            .await
            .map_err(|err| RequestError::Other(err.into()))?
            .to_vec())
    }

    async fn post(&self, path: &str, body: Vec<u8>) -> anyhow::Result<Vec<u8>, RequestError> {
        let res = self
            .http
            .post(self.url(path)?)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_request() {
                    RequestError::Request
                } else {
                    RequestError::Other(err.into())
                }
            })?;
        if !res.status().is_success() {
            return Err(RequestError::Status(res.status().as_u16()));
        }
        Ok(res
            .bytes()
            .await
            .map_err(|err| RequestError::Other(err.into()))?
            .to_vec())
    }

    async fn put(&self, path: &str, body: Vec<u8>) -> anyhow::Result<Vec<u8>, RequestError> {
        let res = self
            .http
            .put(self.url(path)?)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_request() {
                    RequestError::Request
                } else {
                    RequestError::Other(err.into())
                }
            })?;
        if !res.status().is_success() {
            return Err(RequestError::Status(res.status().as_u16()));
        }
        Ok(res
            .bytes()
            .await
            .map_err(|err| RequestError::Other(err.into()))?
            .to_vec())
    }

    async fn delete(&self, path: &str) -> anyhow::Result<Vec<u8>, RequestError> {
        let res = self
            .http
            .delete(self.url(path)?)
            .send()
            .await
            .map_err(|err| {
                if err.is_request() {
                    RequestError::Request
                } else {
                    RequestError::Other(err.into())
                }
            })?;
        if !res.status().is_success() {
            return Err(RequestError::Status(res.status().as_u16()));
        }
        Ok(res
            .bytes()
            .await
            .map_err(|err| RequestError::Other(err.into()))?
            .to_vec())
    }
}
