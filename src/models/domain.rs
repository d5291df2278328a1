use serde::{Deserialize, Serialize};

/// Catalog artwork as served by the gallery backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub medium: String,
    pub price: f64,
    #[serde(default)]
    pub status: ArtworkStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", alias = "image_url", default)]
    pub image_url: Option<String>,
}

impl Artwork {
    /// Helper to check whether the artwork can be recommended
    pub fn is_available(&self) -> bool {
        self.status == ArtworkStatus::Available
    }
}

/// Sale status of a catalog artwork
///
/// Only `available` matters to the recommendation pipeline; every other
/// backend status is folded into `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    Available,
    Sold,
    Reserved,
    #[serde(other)]
    Unavailable,
}

impl Default for ArtworkStatus {
    fn default() -> Self {
        ArtworkStatus::Unavailable
    }
}

/// A user's order and booking history as returned by the gallery backend
///
/// Both collections are optional on the wire; absent fields deserialize to
/// empty vectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserHistory {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
}

impl UserHistory {
    /// True when there is nothing to derive preferences from
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.bookings.is_empty()
    }
}

/// A past artwork order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(alias = "artwork_id", rename = "artworkId")]
    pub artwork_id: String,
    pub artist: String,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(alias = "total_amount", rename = "totalAmount", default)]
    pub total_amount: Option<f64>,
}

impl OrderRecord {
    /// Effective spend for this order: the artwork price when present,
    /// otherwise the order total
    pub fn spend(&self) -> Option<f64> {
        self.price.or(self.total_amount)
    }
}

/// A past exhibition booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(alias = "exhibition_id", rename = "exhibitionId")]
    pub exhibition_id: String,
    #[serde(alias = "exhibition_title", rename = "exhibitionTitle")]
    pub exhibition_title: String,
}

/// Derived per-user preference profile
///
/// Built fresh from a `UserHistory` on every recommendation request and
/// discarded after ranking; never persisted or cached.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPreferences {
    /// Artists ranked by purchase frequency, descending. Ties keep the
    /// iteration order of the underlying frequency map (unspecified).
    pub favorite_artists: Vec<String>,
    /// Mediums ranked by purchase frequency, descending. Same tie caveat.
    pub preferred_mediums: Vec<String>,
    /// At most two ranges: one centered on average spend, one spanning the
    /// literal min/max of past purchase prices.
    pub price_ranges: Vec<PriceRange>,
    pub purchase_history: Vec<PurchaseRecord>,
    /// Collected for future scoring signals; not consulted when ranking.
    pub exhibition_history: Vec<ExhibitionVisit>,
}

impl UserPreferences {
    /// Rank of an artist in the favorites list (0-based), if present
    pub fn artist_rank(&self, artist: &str) -> Option<usize> {
        self.favorite_artists.iter().position(|a| a == artist)
    }

    /// Rank of a medium in the preferred list (0-based), if present
    pub fn medium_rank(&self, medium: &str) -> Option<usize> {
        self.preferred_mediums.iter().position(|m| m == medium)
    }

    /// Whether a price falls inside any stored range
    pub fn in_price_range(&self, price: f64) -> bool {
        self.price_ranges.iter().any(|r| r.contains(price))
    }

    /// Whether the user has ever bought from this artist
    pub fn has_purchased_from(&self, artist: &str) -> bool {
        self.purchase_history.iter().any(|p| p.artist == artist)
    }
}

/// Inclusive price interval
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// One entry of the user's purchase history
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRecord {
    pub artwork_id: String,
    pub artist: String,
    pub medium: String,
    pub price: f64,
}

/// One entry of the user's exhibition history
#[derive(Debug, Clone, Serialize)]
pub struct ExhibitionVisit {
    pub exhibition_id: String,
    pub exhibition_title: String,
}

/// An artwork paired with its transient ranking score
#[derive(Debug, Clone)]
pub struct ScoredArtwork {
    pub artwork: Artwork,
    pub score: f64,
}

/// Scoring contributions
///
/// Rank-based contributions decay linearly with rank and are intentionally
/// not floored at zero; a match deep in the favorites list can subtract from
/// the total.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Contribution of a rank-0 favorite-artist match
    pub artist_base: f64,
    /// Decay per artist rank
    pub artist_step: f64,
    /// Contribution of a rank-0 preferred-medium match
    pub medium_base: f64,
    /// Decay per medium rank
    pub medium_step: f64,
    /// Flat bonus for a price inside any stored range
    pub price_fit: f64,
    /// Flat bonus for artists the user has never bought from
    pub discovery: f64,
    /// Upper bound of the uniform random jitter added to every score
    pub jitter: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            artist_base: 50.0,
            artist_step: 10.0,
            medium_base: 20.0,
            medium_step: 5.0,
            price_fit: 15.0,
            discovery: 5.0,
            jitter: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_catch_all() {
        let artwork: Artwork = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "title": "Dusk",
            "artist": "W. Njoroge",
            "medium": "oil",
            "price": 1200.0,
            "status": "on_loan"
        }))
        .unwrap();

        assert_eq!(artwork.status, ArtworkStatus::Unavailable);
        assert!(!artwork.is_available());
    }

    #[test]
    fn test_history_defaults_to_empty() {
        let history: UserHistory = serde_json::from_str("{}").unwrap();
        assert!(history.orders.is_empty());
        assert!(history.bookings.is_empty());
        assert!(history.is_empty());
    }

    #[test]
    fn test_order_spend_prefers_price() {
        let order: OrderRecord = serde_json::from_value(serde_json::json!({
            "artworkId": "a1",
            "artist": "W. Njoroge",
            "price": 900.0,
            "totalAmount": 950.0
        }))
        .unwrap();
        assert_eq!(order.spend(), Some(900.0));

        let order: OrderRecord = serde_json::from_value(serde_json::json!({
            "artwork_id": "a2",
            "artist": "W. Njoroge",
            "total_amount": 950.0
        }))
        .unwrap();
        assert_eq!(order.spend(), Some(950.0));
    }

    #[test]
    fn test_price_range_contains() {
        let range = PriceRange { min: 70.0, max: 150.0 };
        assert!(range.contains(70.0));
        assert!(range.contains(150.0));
        assert!(!range.contains(69.99));
        assert!(!range.contains(150.01));
    }
}
