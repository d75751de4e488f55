//! Dispatch errors and their HTTP mapping.
//!
//! # Responsibilities
//! - Describe every way a request can fail to reach a reply
//! - Map failures to status codes with a JSON body
//!
//! # Design Decisions
//! - A path with no usable name and an unregistered name are both 404
//! - Ajaxlet failures keep their own category (400, 404 or 500)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::registry::AjaxletError;

/// Reasons a request did not produce an ajaxlet reply.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The path lacks the prefix or a non-empty name segment.
    #[error("path does not name an ajaxlet")]
    NotAjaxPath,

    /// No ajaxlet is registered under the decoded name.
    #[error("no ajaxlet registered as {0:?}")]
    UnknownAjaxlet(String),

    /// The ajaxlet ran and reported a failure.
    #[error("{ajaxlet}: {source}")]
    Ajaxlet {
        ajaxlet: String,
        #[source]
        source: AjaxletError,
    },
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::NotAjaxPath | DispatchError::UnknownAjaxlet(_) => StatusCode::NOT_FOUND,
            DispatchError::Ajaxlet { source, .. } => match source {
                AjaxletError::BadRequest(_) => StatusCode::BAD_REQUEST,
                AjaxletError::UnknownAction(_) => StatusCode::NOT_FOUND,
                AjaxletError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DispatchError::NotAjaxPath.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            DispatchError::UnknownAjaxlet("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        let failed = DispatchError::Ajaxlet {
            ajaxlet: "x".into(),
            source: AjaxletError::BadRequest("missing q".into()),
        };
        assert_eq!(failed.status(), StatusCode::BAD_REQUEST);
        assert_eq!(failed.to_string(), "x: bad request: missing q");
    }

    #[test]
    fn test_into_response_status() {
        let response = DispatchError::Ajaxlet {
            ajaxlet: "x".into(),
            source: AjaxletError::Failed("boom".into()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
