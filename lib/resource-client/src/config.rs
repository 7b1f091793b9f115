use crate::errors::RequestError;

/// Handler invoked with the error of a failed request.
pub type FailHandler = Box<dyn Fn(&RequestError) + Send + Sync>;
/// Handler invoked once a request settled,
/// no matter its outcome.
pub type FinallyHandler = Box<dyn Fn() + Send + Sync>;

/// Configuration for a single request.
///
/// A handler given here overrides the client's default
/// config for this request only. A handler left as `None`
/// falls back to the client's default config, there is
/// no merging beyond that.
#[derive(Default)]
pub struct RequestConfig {
    /// Invoked when the request fails.
    pub on_fail: Option<FailHandler>,
    /// Invoked after success or failure handling completed.
    pub finally: Option<FinallyHandler>,
}

/// Configuration for a single request that submits a model
/// ([`create`](crate::client::ResourceClient::create) &
/// [`update`](crate::client::ResourceClient::update)).
#[derive(Default)]
pub struct ModelRequestConfig {
    /// The request configuration shared with all operations.
    pub request: RequestConfig,
    /// If `true`, the success continuation receives the submitted
    /// model instead of the decoded server response.
    pub cb_with_model: bool,
}
