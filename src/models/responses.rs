use serde::{Deserialize, Serialize};
use crate::models::domain::Artwork;

/// Response for the personalized recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Artwork>,
    /// False when the service fell back to general discovery picks
    pub personalized: bool,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the similar artworks endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarArtworksResponse {
    pub recommendations: Vec<Artwork>,
    #[serde(rename = "artworkId")]
    pub artwork_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
