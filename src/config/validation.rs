//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Check the shell can be rendered
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("shell.mount_id `{0}` must not contain whitespace")]
    MountIdWhitespace(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "server.bind_address", &config.server.bind_address);
    if config.metrics.enabled {
        check_address(&mut errors, "metrics.address", &config.metrics.address);
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::Zero("server.request_timeout_secs"));
    }

    if config.shell.title.trim().is_empty() {
        errors.push(ValidationError::Empty("shell.title"));
    }
    if config.shell.mount_id.is_empty() {
        errors.push(ValidationError::Empty("shell.mount_id"));
    } else if config.shell.mount_id.chars().any(char::is_whitespace) {
        errors.push(ValidationError::MountIdWhitespace(config.shell.mount_id.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
