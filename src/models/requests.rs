use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for personalized recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonalizedRecommendationsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_personalized_limit")]
    pub limit: u16,
}

fn default_personalized_limit() -> u16 {
    6
}

/// Request for artworks similar to one being viewed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarArtworksRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "artwork_id", rename = "artworkId")]
    pub artwork_id: String,
    #[serde(default = "default_similar_limit")]
    pub limit: u16,
}

fn default_similar_limit() -> u16 {
    4
}
