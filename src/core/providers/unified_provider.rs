//! Unified Provider Error Handling
//!
//! Single error type shared by every provider adapter.
//!
//! | Variant | Purpose | HTTP Status |
//! |------|------|------------|
//! | InvalidRequest | Inbound payload is missing its message list | 400 |
//! | Upstream | Provider answered with a non-2xx status | passthrough |
//! | Network | Provider could not be reached | 500 |
//! | Parse | Provider answered 2xx with an undecodable body | 500 |
//! | Configuration | Adapter could not build its outbound request | 500 |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_relay::ProviderError;
//!
//! let err = ProviderError::upstream("anthropic", 503, "upstream down");
//! assert_eq!(err.http_status(), 503);
//! ```

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    /// The provider answered, but with a failure status. `body` is the raw
    /// response text and is surfaced to the client untouched.
    #[error("{provider} returned HTTP {status}: {body}")]
    Upstream {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create upstream failure error
    pub fn upstream(provider: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            status,
            body: body.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create parse error
    pub fn parse(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::InvalidRequest { provider, .. }
            | Self::Upstream { provider, .. }
            | Self::Network { provider, .. }
            | Self::Parse { provider, .. }
            | Self::Configuration { provider, .. } => provider,
        }
    }

    /// HTTP status the relay answers with for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::Upstream { status, .. } => *status,
            Self::Network { .. } | Self::Parse { .. } | Self::Configuration { .. } => 500,
        }
    }

    /// Whether the provider itself reported the failure
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}
