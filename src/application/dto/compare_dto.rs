//! Watchlist comparison DTOs.

use crate::domain::entities::Movie;

/// Where a comparison result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Decoded from a successful service response.
    Service,
    /// The request failed and an empty list was substituted.
    Fallback,
}

impl ResultSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Service => "comparison service",
            Self::Fallback => "empty fallback",
        }
    }
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Comparison response data.
///
/// Screens only look at `movies`; a fallback renders exactly like a service
/// response with no overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareResponse {
    /// Common movies, in service order.
    pub movies: Vec<Movie>,
    /// Result source.
    pub source: ResultSource,
}

impl CompareResponse {
    /// Creates a response from service data.
    #[must_use]
    pub const fn from_service(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            source: ResultSource::Service,
        }
    }

    /// Creates the empty response used when the request fails.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            movies: Vec::new(),
            source: ResultSource::Fallback,
        }
    }
}
