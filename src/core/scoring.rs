use rand::Rng;

use crate::models::{Artwork, ScoreWeights, UserPreferences};

/// Calculate a recommendation score for an artwork against a preference
/// profile
///
/// Scoring formula (with default weights):
/// ```text
/// score = artist_match   (50 - 10 * rank)   # rank in favorite_artists
///       + medium_match   (20 - 5 * rank)    # rank in preferred_mediums
///       + price_fit      (+15)              # price inside any stored range
///       + discovery      (+5)               # artist never purchased before
///       + jitter         uniform(0, 10)
/// ```
///
/// Rank contributions are not floored: an artist at rank 5 or below drags
/// the score down rather than adding to it.
pub fn calculate_recommendation_score<R: Rng>(
    artwork: &Artwork,
    preferences: &UserPreferences,
    weights: &ScoreWeights,
    rng: &mut R,
) -> f64 {
    let mut score = 0.0;

    if let Some(rank) = preferences.artist_rank(&artwork.artist) {
        score += weights.artist_base - rank as f64 * weights.artist_step;
    }

    if let Some(rank) = preferences.medium_rank(&artwork.medium) {
        score += weights.medium_base - rank as f64 * weights.medium_step;
    }

    if preferences.in_price_range(artwork.price) {
        score += weights.price_fit;
    }

    if !preferences.has_purchased_from(&artwork.artist) {
        score += weights.discovery;
    }

    // Jitter keeps repeated requests from always surfacing the same pieces
    if weights.jitter > 0.0 {
        score += rng.gen_range(0.0..weights.jitter);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtworkStatus, PriceRange, PurchaseRecord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn artwork(artist: &str, medium: &str, price: f64) -> Artwork {
        Artwork {
            id: "a1".to_string(),
            title: "Test Piece".to_string(),
            artist: artist.to_string(),
            medium: medium.to_string(),
            price,
            status: ArtworkStatus::Available,
            description: None,
            image_url: None,
        }
    }

    fn purchase(artist: &str) -> PurchaseRecord {
        PurchaseRecord {
            artwork_id: "old".to_string(),
            artist: artist.to_string(),
            medium: "oil".to_string(),
            price: 100.0,
        }
    }

    fn deterministic_weights() -> ScoreWeights {
        ScoreWeights {
            jitter: 0.0,
            ..ScoreWeights::default()
        }
    }

    #[test]
    fn test_perfect_match_band() {
        let preferences = UserPreferences {
            favorite_artists: vec!["Wanjiru".to_string()],
            preferred_mediums: vec!["oil".to_string()],
            price_ranges: vec![PriceRange { min: 50.0, max: 200.0 }],
            purchase_history: vec![purchase("Otieno")],
            exhibition_history: vec![],
        };
        let candidate = artwork("Wanjiru", "oil", 100.0);
        let mut rng = StdRng::seed_from_u64(7);

        // 50 + 20 + 15 + 5 (never bought from Wanjiru) plus jitter in [0, 10)
        let score = calculate_recommendation_score(
            &candidate,
            &preferences,
            &ScoreWeights::default(),
            &mut rng,
        );
        assert!(score >= 90.0 && score < 100.0, "score {} outside [90, 100)", score);
    }

    #[test]
    fn test_rank_decay() {
        let preferences = UserPreferences {
            favorite_artists: vec!["First".to_string(), "Second".to_string()],
            preferred_mediums: vec!["oil".to_string(), "charcoal".to_string()],
            ..UserPreferences::default()
        };
        let weights = deterministic_weights();
        let mut rng = StdRng::seed_from_u64(7);

        let first = calculate_recommendation_score(
            &artwork("First", "oil", 0.0),
            &preferences,
            &weights,
            &mut rng,
        );
        let second = calculate_recommendation_score(
            &artwork("Second", "charcoal", 0.0),
            &preferences,
            &weights,
            &mut rng,
        );

        // 50 + 20 + 5 vs 40 + 15 + 5
        assert_eq!(first, 75.0);
        assert_eq!(second, 60.0);
    }

    #[test]
    fn test_deep_rank_goes_negative() {
        let favorite_artists: Vec<String> =
            (0..7).map(|i| format!("Artist {}", i)).collect();
        let purchase_history = favorite_artists.iter().map(|a| purchase(a)).collect();
        let preferences = UserPreferences {
            favorite_artists,
            purchase_history,
            ..UserPreferences::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        // Rank 6: 50 - 60 = -10, no discovery bonus, nothing else matches
        let score = calculate_recommendation_score(
            &artwork("Artist 6", "oil", 0.0),
            &preferences,
            &deterministic_weights(),
            &mut rng,
        );
        assert_eq!(score, -10.0);
    }

    #[test]
    fn test_discovery_bonus_only_for_new_artists() {
        let preferences = UserPreferences {
            purchase_history: vec![purchase("Known")],
            ..UserPreferences::default()
        };
        let weights = deterministic_weights();
        let mut rng = StdRng::seed_from_u64(7);

        let known = calculate_recommendation_score(
            &artwork("Known", "oil", 0.0),
            &preferences,
            &weights,
            &mut rng,
        );
        let unknown = calculate_recommendation_score(
            &artwork("New Artist", "oil", 0.0),
            &preferences,
            &weights,
            &mut rng,
        );

        assert_eq!(known, 0.0);
        assert_eq!(unknown, 5.0);
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let preferences = UserPreferences::default();
        let candidate = artwork("Anyone", "oil", 0.0);
        let weights = ScoreWeights::default();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = calculate_recommendation_score(&candidate, &preferences, &weights, &mut rng_a);
        let b = calculate_recommendation_score(&candidate, &preferences, &weights, &mut rng_b);

        assert_eq!(a, b);
    }
}
