//! Watchlist comparison use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::CompareResponse;
use crate::domain::entities::HandlePair;
use crate::domain::ports::RecommendationPort;

/// Fetches common movies for two handles, never failing.
#[derive(Clone)]
pub struct CompareWatchlistsUseCase {
    recommendation_port: Arc<dyn RecommendationPort>,
}

impl CompareWatchlistsUseCase {
    /// Creates new comparison use case.
    #[must_use]
    pub const fn new(recommendation_port: Arc<dyn RecommendationPort>) -> Self {
        Self {
            recommendation_port,
        }
    }

    /// Executes the comparison.
    ///
    /// Any failure is logged and replaced with an empty list.
    pub async fn execute(&self, handles: &HandlePair) -> CompareResponse {
        debug!(user = %handles.user(), peer = %handles.peer(), "Comparing watchlists");

        match self.recommendation_port.fetch_common_movies(handles).await {
            Ok(movies) => {
                info!(
                    user = %handles.user(),
                    peer = %handles.peer(),
                    count = movies.len(),
                    "Received common movies"
                );
                CompareResponse::from_service(movies)
            }
            Err(e) => {
                error!(
                    error = %e,
                    network = e.is_network_error(),
                    "Error fetching movies, showing no common movies"
                );
                CompareResponse::fallback()
            }
        }
    }
}
