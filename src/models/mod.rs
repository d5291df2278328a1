// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Artwork, ArtworkStatus, UserHistory, OrderRecord, BookingRecord, UserPreferences, PriceRange, PurchaseRecord, ExhibitionVisit, ScoredArtwork, ScoreWeights};
pub use requests::{PersonalizedRecommendationsRequest, SimilarArtworksRequest};
pub use responses::{RecommendationsResponse, SimilarArtworksResponse, HealthResponse, ErrorResponse};
