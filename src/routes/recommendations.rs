use actix_web::{web, HttpResponse, Responder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use validator::Validate;

use crate::core::RecommendationEngine;
use crate::models::{
    ErrorResponse, HealthResponse, PersonalizedRecommendationsRequest, RecommendationsResponse,
    SimilarArtworksRequest, SimilarArtworksResponse,
};
use crate::services::GalleryApiClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<GalleryApiClient>,
    pub engine: RecommendationEngine,
    /// Hard cap on per-request recommendation counts
    pub max_limit: usize,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route(
            "/recommendations/personalized",
            web::post().to(personalized_recommendations),
        )
        .route(
            "/recommendations/similar",
            web::post().to(similar_artworks),
        );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Personalized recommendations endpoint
///
/// POST /api/v1/recommendations/personalized
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 6
/// }
/// ```
///
/// The response always carries a recommendation list; when the user's
/// history cannot be fetched or is empty, `personalized` is false and the
/// list is a general discovery sample.
async fn personalized_recommendations(
    state: web::Data<AppState>,
    req: web::Json<PersonalizedRecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!("Generating recommendations for user: {}, limit: {}", user_id, limit);

    let catalog = match state.api.get_artworks().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to fetch catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let mut rng = StdRng::from_entropy();
    let result = state
        .engine
        .personalized(&state.api, user_id, &catalog, limit, &mut rng)
        .await;

    tracing::info!(
        "Returning {} recommendations for user {} (personalized: {}, from {} artworks)",
        result.recommendations.len(),
        user_id,
        result.personalized,
        result.total_candidates
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        recommendations: result.recommendations,
        personalized: result.personalized,
        total_candidates: result.total_candidates,
    })
}

/// Similar artworks endpoint
///
/// POST /api/v1/recommendations/similar
///
/// Request body:
/// ```json
/// {
///   "artworkId": "string",
///   "limit": 4
/// }
/// ```
async fn similar_artworks(
    state: web::Data<AppState>,
    req: web::Json<SimilarArtworksRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = (req.limit as usize).min(state.max_limit);

    let catalog = match state.api.get_artworks().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to fetch catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let current = match catalog.iter().find(|a| a.id == req.artwork_id) {
        Some(artwork) => artwork.clone(),
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Artwork not found".to_string(),
                message: format!("No artwork with id {}", req.artwork_id),
                status_code: 404,
            });
        }
    };

    let mut rng = StdRng::from_entropy();
    let recommendations = state.engine.similar(&current, &catalog, limit, &mut rng);

    tracing::debug!(
        "Returning {} similar artworks for {}",
        recommendations.len(),
        req.artwork_id
    );

    HttpResponse::Ok().json(SimilarArtworksResponse {
        recommendations,
        artwork_id: req.artwork_id.clone(),
    })
}
