//! Recommendation port definition.

use async_trait::async_trait;

use crate::domain::entities::{HandlePair, Movie};
use crate::domain::errors::RecommendationError;

/// Port for the external watchlist comparison service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationPort: Send + Sync {
    /// Returns the movies both handles have on their watchlists, in service order.
    async fn fetch_common_movies(
        &self,
        handles: &HandlePair,
    ) -> Result<Vec<Movie>, RecommendationError>;
}
