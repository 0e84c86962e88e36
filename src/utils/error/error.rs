//! Error handling for the relay
//!
//! This module defines the service-level error type and its mapping onto
//! HTTP responses.

use crate::core::providers::unified_provider::ProviderError;
use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Only POST is routed to providers
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Client exhausted its request window
    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimit { retry_after_secs: u64 },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// Server startup or runtime errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u64>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            retry_after_seconds: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(error)
        }
    }
}

impl GatewayError {
    fn body(&self) -> ErrorBody {
        match self {
            GatewayError::MethodNotAllowed => ErrorBody::new("Method not allowed"),
            GatewayError::RateLimit { retry_after_secs } => ErrorBody {
                retry_after_seconds: Some(*retry_after_secs),
                ..ErrorBody::new("Too many requests. Please try again later.")
            },
            GatewayError::Validation(message) => ErrorBody::new(message.clone()),
            GatewayError::Provider(ProviderError::InvalidRequest { message, .. }) => {
                ErrorBody::new(message.clone())
            }
            GatewayError::Provider(ProviderError::Upstream { provider, body, .. }) => {
                ErrorBody::with_details(
                    format!("{} API request failed", display_name(provider)),
                    body.clone(),
                )
            }
            GatewayError::Provider(err) => {
                ErrorBody::with_details("Internal server error", err.to_string())
            }
            other => ErrorBody::with_details("Internal server error", other.to_string()),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Provider(err) => StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let GatewayError::RateLimit { retry_after_secs } = self {
            response.insert_header((RETRY_AFTER, retry_after_secs.to_string()));
        }
        response.json(self.body())
    }
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        GatewayError::Provider(err)
    }
}

/// Human-facing provider name used in upstream failure messages
fn display_name(provider: &str) -> &str {
    match provider {
        "gemini" => "Gemini",
        "anthropic" => "Claude",
        "openrouter" => "OpenRouter",
        other => other,
    }
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
