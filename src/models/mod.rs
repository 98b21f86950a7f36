pub mod profile;
pub mod recommendation;

pub use profile::{Product, ProfilePayload, UserProfile};
pub use recommendation::{
    RecommendationCategory, RecommendationItem, RecommendationResult, StructuredRecommendations,
};
