use std::collections::HashMap;

use crate::models::{ExhibitionVisit, PriceRange, PurchaseRecord, UserHistory, UserPreferences};

/// Derive a preference profile from a user's order and booking history
///
/// This is Stage 1 of the recommendation pipeline: frequency-rank the
/// artists and mediums the user has bought, derive price ranges from past
/// spend, and keep the raw purchase/exhibition trail for the scoring stage.
pub fn analyze_user_preferences(history: &UserHistory) -> UserPreferences {
    let mut preferences = UserPreferences::default();

    let mut artist_counts: HashMap<&str, u32> = HashMap::new();
    let mut medium_counts: HashMap<&str, u32> = HashMap::new();
    let mut prices: Vec<f64> = Vec::new();

    for order in &history.orders {
        *artist_counts.entry(order.artist.as_str()).or_insert(0) += 1;

        // Medium is not always present on older order rows
        if let Some(medium) = &order.medium {
            *medium_counts.entry(medium.as_str()).or_insert(0) += 1;
        }

        if let Some(spend) = order.spend() {
            prices.push(spend);
        }

        preferences.purchase_history.push(PurchaseRecord {
            artwork_id: order.artwork_id.clone(),
            artist: order.artist.clone(),
            medium: order
                .medium
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            price: order.spend().unwrap_or(0.0),
        });
    }

    // Every artist/medium with at least one purchase makes the list;
    // the ordering carries the signal, not a cutoff
    preferences.favorite_artists = rank_by_count(artist_counts);
    preferences.preferred_mediums = rank_by_count(medium_counts);

    if !prices.is_empty() {
        let avg = prices.iter().sum::<f64>() / prices.len() as f64;
        let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        // A band around the average spend (30% below to 50% above)...
        preferences.price_ranges.push(PriceRange {
            min: (avg * 0.7).max(0.0),
            max: avg * 1.5,
        });

        // ...and the literal range they have purchased in
        preferences.price_ranges.push(PriceRange { min, max });
    }

    for booking in &history.bookings {
        preferences.exhibition_history.push(ExhibitionVisit {
            exhibition_id: booking.exhibition_id.clone(),
            exhibition_title: booking.exhibition_title.clone(),
        });
    }

    preferences
}

/// Sort frequency-map entries by descending count
///
/// Equal counts keep the map's iteration order, which is unspecified.
fn rank_by_count(counts: HashMap<&str, u32>) -> Vec<String> {
    let mut entries: Vec<(&str, u32)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().map(|(name, _)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingRecord, OrderRecord};

    fn order(artist: &str, medium: Option<&str>, price: f64) -> OrderRecord {
        OrderRecord {
            artwork_id: "a1".to_string(),
            artist: artist.to_string(),
            medium: medium.map(|m| m.to_string()),
            price: Some(price),
            total_amount: None,
        }
    }

    #[test]
    fn test_artists_ranked_by_frequency() {
        let history = UserHistory {
            orders: vec![
                order("Wanjiru", Some("oil"), 100.0),
                order("Otieno", Some("charcoal"), 200.0),
                order("Wanjiru", Some("oil"), 150.0),
            ],
            bookings: vec![],
        };

        let preferences = analyze_user_preferences(&history);

        assert_eq!(preferences.favorite_artists[0], "Wanjiru");
        assert_eq!(preferences.favorite_artists.len(), 2);
        assert_eq!(preferences.preferred_mediums[0], "oil");
    }

    #[test]
    fn test_price_ranges_from_spend() {
        let history = UserHistory {
            orders: vec![
                order("Wanjiru", None, 100.0),
                order("Otieno", None, 300.0),
            ],
            bookings: vec![],
        };

        let preferences = analyze_user_preferences(&history);

        // avg = 200: band is [140, 300]
        assert_eq!(preferences.price_ranges.len(), 2);
        assert!((preferences.price_ranges[0].min - 140.0).abs() < 1e-9);
        assert!((preferences.price_ranges[0].max - 300.0).abs() < 1e-9);
        // literal range is [100, 300]
        assert!((preferences.price_ranges[1].min - 100.0).abs() < 1e-9);
        assert!((preferences.price_ranges[1].max - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_priceless_orders_still_count() {
        let mut priceless = order("Wanjiru", Some("oil"), 0.0);
        priceless.price = None;
        priceless.total_amount = None;

        let history = UserHistory {
            orders: vec![priceless],
            bookings: vec![],
        };

        let preferences = analyze_user_preferences(&history);

        assert_eq!(preferences.favorite_artists, vec!["Wanjiru"]);
        assert!(preferences.price_ranges.is_empty());
        assert_eq!(preferences.purchase_history[0].price, 0.0);
    }

    #[test]
    fn test_missing_medium_recorded_as_unknown() {
        let history = UserHistory {
            orders: vec![order("Wanjiru", None, 100.0)],
            bookings: vec![],
        };

        let preferences = analyze_user_preferences(&history);

        assert!(preferences.preferred_mediums.is_empty());
        assert_eq!(preferences.purchase_history[0].medium, "Unknown");
    }

    #[test]
    fn test_bookings_collected() {
        let history = UserHistory {
            orders: vec![],
            bookings: vec![BookingRecord {
                exhibition_id: "e7".to_string(),
                exhibition_title: "Contemporary Voices".to_string(),
            }],
        };

        let preferences = analyze_user_preferences(&history);

        assert_eq!(preferences.exhibition_history.len(), 1);
        assert_eq!(preferences.exhibition_history[0].exhibition_id, "e7");
        assert!(preferences.favorite_artists.is_empty());
    }

    #[test]
    fn test_empty_history_yields_empty_profile() {
        let preferences = analyze_user_preferences(&UserHistory::default());

        assert!(preferences.favorite_artists.is_empty());
        assert!(preferences.preferred_mediums.is_empty());
        assert!(preferences.price_ranges.is_empty());
        assert!(preferences.purchase_history.is_empty());
        assert!(preferences.exhibition_history.is_empty());
    }
}
