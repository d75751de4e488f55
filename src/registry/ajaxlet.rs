//! Ajaxlet contract.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failure reported by an ajaxlet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AjaxletError {
    /// The request parameters were unusable.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The ajaxlet does not implement the requested action.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The ajaxlet failed while serving the call.
    #[error("ajaxlet failed: {0}")]
    Failed(String),
}

/// A single dispatched call, as seen by the ajaxlet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AjaxCall {
    /// Decoded ajaxlet name the call was routed by.
    pub ajaxlet: String,

    /// Decoded action token, if the path carried one.
    pub action: Option<String>,

    /// Decoded query parameters in request order.
    pub params: Vec<(String, String)>,
}

impl AjaxCall {
    /// First value for `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Request-processing unit registered under a name.
pub trait Ajaxlet: Send + Sync + 'static {
    /// Serve one call and produce a JSON reply.
    fn service(&self, call: &AjaxCall) -> Result<Value, AjaxletError>;
}

impl<F> Ajaxlet for F
where
    F: Fn(&AjaxCall) -> Result<Value, AjaxletError> + Send + Sync + 'static,
{
    fn service(&self, call: &AjaxCall) -> Result<Value, AjaxletError> {
        self(call)
    }
}
