use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Artwork, UserHistory};

/// Errors that can occur when talking to the gallery backend
#[derive(Debug, Error)]
pub enum GalleryApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    ApiError(String),

    #[error("Backend reported error: {0}")]
    BackendError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Gallery backend API client
///
/// Handles all communication with the storefront backend:
/// - Fetching a user's order and booking history
/// - Fetching the artwork catalog
pub struct GalleryApiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl GalleryApiClient {
    /// Create a new gallery API client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch all orders and exhibition bookings for a user
    ///
    /// The backend reports failures two ways: a non-2xx status, or a 200
    /// with an `{"error": ...}` body. Both map to an `Err` here.
    pub async fn get_user_history(&self, user_id: &str) -> Result<UserHistory, GalleryApiError> {
        let url = format!(
            "{}/user/{}/orders",
            self.base_url.trim_end_matches('/'),
            user_id
        );

        tracing::debug!("Fetching history from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GalleryApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(GalleryApiError::ApiError(format!(
                "Failed to fetch history: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        if let Some(error) = json.get("error").and_then(|e| e.as_str()) {
            return Err(GalleryApiError::BackendError(error.to_string()));
        }

        serde_json::from_value(json)
            .map_err(|e| GalleryApiError::InvalidResponse(format!("Failed to parse history: {}", e)))
    }

    /// Fetch the full artwork catalog
    ///
    /// Rows that fail to parse are skipped rather than failing the whole
    /// catalog.
    pub async fn get_artworks(&self) -> Result<Vec<Artwork>, GalleryApiError> {
        let url = format!("{}/artworks", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GalleryApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(GalleryApiError::ApiError(format!(
                "Failed to fetch artworks: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        if let Some(error) = json.get("error").and_then(|e| e.as_str()) {
            return Err(GalleryApiError::BackendError(error.to_string()));
        }

        let rows = json
            .as_array()
            .ok_or_else(|| GalleryApiError::InvalidResponse("Expected artwork array".into()))?;

        let artworks: Vec<Artwork> = rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect();

        tracing::debug!("Fetched {} artworks ({} rows)", artworks.len(), rows.len());

        Ok(artworks)
    }
}
