use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{profile::analyze_user_preferences, scoring::calculate_recommendation_score};
use crate::models::{Artwork, ScoreWeights, ScoredArtwork, UserPreferences};
use crate::services::GalleryApiClient;

/// Result of a recommendation request
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<Artwork>,
    /// False when the general fallback produced the list
    pub personalized: bool,
    pub total_candidates: usize,
}

/// Recommendation orchestrator
///
/// # Pipeline stages
/// 1. Fetch the user's order/booking history
/// 2. Derive a preference profile from it
/// 3. Score and rank the available catalog
/// 4. Truncate to the requested count
///
/// Any failure in stage 1, and a history with nothing in it, short-circuits
/// to the non-personalized general fallback. The engine itself never fails:
/// callers always get an artwork list back.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    weights: ScoreWeights,
}

impl RecommendationEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Generate personalized recommendations for a user
    ///
    /// # Arguments
    /// * `api` - Gallery backend client used to fetch the user's history
    /// * `user_id` - The user to personalize for
    /// * `catalog` - The full artwork catalog (supplied by the caller)
    /// * `limit` - Maximum number of recommendations to return
    /// * `rng` - Randomness source for jitter and fallback shuffling
    pub async fn personalized<R: Rng>(
        &self,
        api: &GalleryApiClient,
        user_id: &str,
        catalog: &[Artwork],
        limit: usize,
        rng: &mut R,
    ) -> RecommendationResult {
        let history = match api.get_user_history(user_id).await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(
                    "History fetch failed for {}, serving general recommendations: {}",
                    user_id,
                    e
                );
                return self.general_result(catalog, limit, rng);
            }
        };

        if history.is_empty() {
            tracing::debug!(
                "No usable history for {}, serving general recommendations",
                user_id
            );
            return self.general_result(catalog, limit, rng);
        }

        let preferences = analyze_user_preferences(&history);

        tracing::debug!(
            "Derived profile for {}: {} artists, {} mediums, {} price ranges",
            user_id,
            preferences.favorite_artists.len(),
            preferences.preferred_mediums.len(),
            preferences.price_ranges.len()
        );

        let recommendations = self.rank_by_preferences(&preferences, catalog, limit, rng);

        RecommendationResult {
            recommendations,
            personalized: true,
            total_candidates: catalog.len(),
        }
    }

    /// Score every available artwork against a profile and return the top
    /// `limit`, best first
    pub fn rank_by_preferences<R: Rng>(
        &self,
        preferences: &UserPreferences,
        catalog: &[Artwork],
        limit: usize,
        rng: &mut R,
    ) -> Vec<Artwork> {
        let mut scored: Vec<ScoredArtwork> = catalog
            .iter()
            .filter(|artwork| artwork.is_available())
            .map(|artwork| ScoredArtwork {
                artwork: artwork.clone(),
                score: calculate_recommendation_score(artwork, preferences, &self.weights, rng),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        scored.into_iter().map(|s| s.artwork).collect()
    }

    /// Non-personalized fallback: a random sample of the available catalog
    pub fn general<R: Rng>(
        &self,
        catalog: &[Artwork],
        limit: usize,
        rng: &mut R,
    ) -> Vec<Artwork> {
        let mut available: Vec<Artwork> = catalog
            .iter()
            .filter(|artwork| artwork.is_available())
            .cloned()
            .collect();

        available.shuffle(rng);
        available.truncate(limit);
        available
    }

    /// Artworks related to the one being viewed: same artist, same medium,
    /// or priced within 50% of it
    ///
    /// Order is randomized before truncating, so two calls with the same
    /// inputs may return different subsets when more than `limit` artworks
    /// qualify.
    pub fn similar<R: Rng>(
        &self,
        current: &Artwork,
        catalog: &[Artwork],
        limit: usize,
        rng: &mut R,
    ) -> Vec<Artwork> {
        let mut candidates: Vec<Artwork> = catalog
            .iter()
            .filter(|artwork| artwork.id != current.id && artwork.is_available())
            .filter(|artwork| {
                artwork.artist == current.artist
                    || artwork.medium == current.medium
                    || (artwork.price - current.price).abs() < current.price * 0.5
            })
            .cloned()
            .collect();

        candidates.shuffle(rng);
        candidates.truncate(limit);
        candidates
    }

    fn general_result<R: Rng>(
        &self,
        catalog: &[Artwork],
        limit: usize,
        rng: &mut R,
    ) -> RecommendationResult {
        RecommendationResult {
            recommendations: self.general(catalog, limit, rng),
            personalized: false,
            total_candidates: catalog.len(),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
