mod recommendation_port;

pub use recommendation_port::RecommendationPort;

#[cfg(test)]
pub mod mocks {
    pub use super::recommendation_port::MockRecommendationPort;
}
