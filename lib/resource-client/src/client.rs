use std::{fmt::Display, marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::{ModelRequestConfig, RequestConfig},
    errors::RequestError,
    interface::Http,
};

/// A client for one REST resource, generic over the
/// model type `T` the resource serves.
///
/// The client holds a shared reference to an externally
/// constructed & configured [`Http`] implementation and the
/// base path of the resource. It keeps no per-request state,
/// so concurrent calls on one instance are independent.
///
/// Failed requests never propagate an error to the caller.
/// Instead the error is routed to the fail handler of the
/// per-call config, else to the one of [`Self::default_config`],
/// else dropped. The `finally` handler follows the same
/// override rule and runs exactly once per call, after
/// success or failure handling completed.
pub struct ResourceClient<T> {
    http: Arc<dyn Http>,
    base_path: String,
    /// The fallback config for all requests of this client.
    /// Owned by this instance, never shared with other instances.
    pub default_config: RequestConfig,
    resource: PhantomData<fn() -> T>,
}

impl<T> ResourceClient<T> {
    /// Creates a client for the resource at `base_path`
    /// without any default handlers.
    pub fn new(http: Arc<dyn Http>, base_path: impl Into<String>) -> Self {
        Self::with_config(http, base_path, RequestConfig::default())
    }

    /// Creates a client for the resource at `base_path` with
    /// the given fallback config.
    pub fn with_config(
        http: Arc<dyn Http>,
        base_path: impl Into<String>,
        default_config: RequestConfig,
    ) -> Self {
        Self {
            http,
            base_path: base_path.into(),
            default_config,
            resource: PhantomData,
        }
    }

    /// Get the path to an item of this resource by combining
    /// the base path and the item's id.
    ///
    /// Inserts a `/` between the two parts if neither supplies
    /// one and never produces a double slash.
    pub fn item_path(&self, id: impl Display) -> String {
        let id = id.to_string();
        match (self.base_path.ends_with('/'), id.starts_with('/')) {
            (true, true) => format!("{}{}", self.base_path, id.trim_start_matches('/')),
            (false, false) => format!("{}/{}", self.base_path, id),
            _ => format!("{}{}", self.base_path, id),
        }
    }

    fn handle_error(&self, err: &RequestError, config: Option<&RequestConfig>) {
        if let Some(on_fail) = config
            .and_then(|config| config.on_fail.as_ref())
            .or_else(|| self.default_config.on_fail.as_ref())
        {
            on_fail(err);
        }
    }

    fn finish(&self, config: Option<&RequestConfig>) {
        if let Some(finally) = config
            .and_then(|config| config.finally.as_ref())
            .or_else(|| self.default_config.finally.as_ref())
        {
            finally();
        }
    }
}

impl<T> ResourceClient<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Requests the list of all items of this resource and invokes
    /// `cb` with the decoded items.
    /// HTTP verb: `GET`.
    pub async fn list<F>(&self, cb: F, config: Option<&RequestConfig>)
    where
        F: FnOnce(Vec<T>),
    {
        let res = self.http.get(&self.base_path).await;
        self.complete(res, cb, config);
    }

    /// Requests the item with the given id and invokes
    /// `cb` with the decoded item.
    /// HTTP verb: `GET`.
    pub async fn get<F>(&self, id: impl Display, cb: F, config: Option<&RequestConfig>)
    where
        F: FnOnce(T),
    {
        let res = self.http.get(&self.item_path(id)).await;
        self.complete(res, cb, config);
    }

    /// Submits `model` to create a new item of this resource.
    /// On success `cb` is invoked, if given, with the decoded
    /// response, or with the submitted `model` itself if the
    /// config requests [`cb_with_model`](ModelRequestConfig::cb_with_model).
    /// HTTP verb: `POST`.
    pub async fn create<F>(&self, model: T, cb: Option<F>, config: Option<&ModelRequestConfig>)
    where
        F: FnOnce(T),
    {
        let Some(encoded) = self.encode(&model, config.map(|config| &config.request)) else {
            return;
        };
        let res = self.http.post(&self.base_path, encoded).await;
        self.complete_model(res, model, cb, config);
    }

    /// Submits `model` to replace the item with the given id.
    /// The request goes to the item path plus a trailing `/`.
    /// On success `cb` is invoked with the decoded response, or
    /// with the submitted `model` itself if the config requests
    /// [`cb_with_model`](ModelRequestConfig::cb_with_model).
    /// HTTP verb: `PUT`.
    pub async fn update<F>(
        &self,
        model: T,
        id: impl Display,
        cb: F,
        config: Option<&ModelRequestConfig>,
    ) where
        F: FnOnce(T),
    {
        let Some(encoded) = self.encode(&model, config.map(|config| &config.request)) else {
            return;
        };
        let path = self.item_path(id) + "/";
        let res = self.http.put(&path, encoded).await;
        self.complete_model(res, model, Some(cb), config);
    }

    /// Requests the deletion of the item with the given id and
    /// invokes `cb` with the decoded response.
    /// HTTP verb: `DELETE`.
    pub async fn delete<F>(&self, id: impl Display, cb: F, config: Option<&RequestConfig>)
    where
        F: FnOnce(T),
    {
        let res = self.http.delete(&self.item_path(id)).await;
        self.complete(res, cb, config);
    }

    fn encode(&self, model: &T, config: Option<&RequestConfig>) -> Option<Vec<u8>> {
        match serde_json::to_vec(model) {
            Ok(encoded) => Some(encoded),
            Err(err) => {
                self.handle_error(&err.into(), config);
                self.finish(config);
                None
            }
        }
    }

    fn complete<R, F>(
        &self,
        res: Result<Vec<u8>, RequestError>,
        cb: F,
        config: Option<&RequestConfig>,
    ) where
        R: DeserializeOwned,
        F: FnOnce(R),
    {
        match res.and_then(|body| serde_json::from_slice(&body).map_err(Into::into)) {
            Ok(value) => cb(value),
            Err(err) => self.handle_error(&err, config),
        }
        self.finish(config);
    }

    fn complete_model<F>(
        &self,
        res: Result<Vec<u8>, RequestError>,
        model: T,
        cb: Option<F>,
        config: Option<&ModelRequestConfig>,
    ) where
        F: FnOnce(T),
    {
        let request = config.map(|config| &config.request);
        match res {
            Ok(body) => {
                if let Some(cb) = cb {
                    if config.is_some_and(|config| config.cb_with_model) {
                        cb(model);
                    } else {
                        match serde_json::from_slice(&body) {
                            Ok(value) => cb(value),
                            Err(err) => self.handle_error(&err.into(), request),
                        }
                    }
                }
            }
            Err(err) => self.handle_error(&err, request),
        }
        self.finish(request);
    }
}
