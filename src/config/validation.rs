//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the dispatch prefix shape
//! - Validate value ranges and addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DispatchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::DispatchConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("dispatch.prefix must not be empty")]
    EmptyPrefix,

    #[error("dispatch.prefix must start with '/': {0:?}")]
    RelativePrefix(String),

    #[error("{field} is not a socket address: {value:?}")]
    BadAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let prefix = &config.dispatch.prefix;
    if prefix.is_empty() {
        errors.push(ValidationError::EmptyPrefix);
    } else if !prefix.starts_with('/') {
        errors.push(ValidationError::RelativePrefix(prefix.clone()));
    }

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BadAddress {
            field,
            value: value.to_string(),
        });
    }
}
