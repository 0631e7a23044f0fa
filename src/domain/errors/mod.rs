//! Domain error types.

mod recommendation_error;

pub use recommendation_error::RecommendationError;
