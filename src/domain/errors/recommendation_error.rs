//! Recommendation fetch error types.

use thiserror::Error;

/// Recommendation fetch error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RecommendationError {
    #[error("network error while fetching recommendations: {message}")]
    NetworkError { message: String },

    #[error("comparison service returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to decode recommendations: {message}")]
    Decode { message: String },

    #[error("unexpected recommendation error: {message}")]
    Unexpected { message: String },
}

impl RecommendationError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the request never got a response.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }
}
