//! Ajaxlets shipped with the dispatcher.

use std::sync::Arc;

use serde_json::{json, Value};

use super::{AjaxCall, Ajaxlet, AjaxletError, HandlerRegistry};

/// Replies with the call it received.
#[derive(Debug, Default)]
pub struct EchoAjaxlet;

impl Ajaxlet for EchoAjaxlet {
    fn service(&self, call: &AjaxCall) -> Result<Value, AjaxletError> {
        serde_json::to_value(call).map_err(|e| AjaxletError::Failed(e.to_string()))
    }
}

/// Liveness check. Only the bare call and the `ping` action are understood.
#[derive(Debug, Default)]
pub struct PingAjaxlet;

impl Ajaxlet for PingAjaxlet {
    fn service(&self, call: &AjaxCall) -> Result<Value, AjaxletError> {
        match call.action.as_deref() {
            None | Some("ping") => Ok(json!("pong")),
            Some(other) => Err(AjaxletError::UnknownAction(other.to_string())),
        }
    }
}

/// Register the built-in ajaxlets.
pub fn register_builtins(registry: &HandlerRegistry) {
    registry.register("echo", Arc::new(EchoAjaxlet));
    registry.register("ping", Arc::new(PingAjaxlet));
}
