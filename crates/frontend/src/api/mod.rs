//! Rental backend API client.
//!
//! # Architecture
//!
//! - The backend is the source of truth - NO local sync, direct REST calls
//! - [`RentalApi`] is the narrow seam the catalog, gate and routes consume;
//!   the reqwest-backed [`BackendClient`] is the production implementation
//! - Session identity is an opaque bearer token issued by `login`; the
//!   frontend never inspects it
//!
//! # Example
//!
//! ```rust,ignore
//! use casabnb_frontend::api::{BackendClient, RentalApi};
//!
//! let client = BackendClient::new(&config.backend_url);
//!
//! let places = client.list_places().await?;
//! let reviews = client.list_reviews(&places[0].id).await?;
//! ```

mod client;

pub use client::BackendClient;

use casabnb_core::{Place, PlaceId, Rating, Review, User, UserId};
use thiserror::Error;

/// Errors that can occur when talking to the rental backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (network unreachable, connection refused, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend answered with a non-success status we have no better name for.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate review submission (HTTP 409).
    #[error("{0}")]
    Conflict(String),

    /// Missing or rejected credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl ApiError {
    /// Whether this error is a transport-level failure that should be
    /// surfaced as a visible error block rather than handled specially.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Parse(_) | Self::Status { .. }
        )
    }
}

/// Capabilities the frontend consumes from the rental backend.
///
/// The catalog store and auth gate are generic over this trait so tests
/// can drive them with a stub instead of a live backend.
#[allow(async_fn_in_trait)]
pub trait RentalApi {
    /// Fetch the full place collection.
    async fn list_places(&self) -> Result<Vec<Place>, ApiError>;

    /// Fetch a single place by id.
    async fn get_place(&self, id: &PlaceId) -> Result<Place, ApiError>;

    /// Fetch the reviews of a place.
    async fn list_reviews(&self, place_id: &PlaceId) -> Result<Vec<Review>, ApiError>;

    /// Submit a new review. Duplicate submissions yield [`ApiError::Conflict`].
    async fn create_review(
        &self,
        token: &str,
        place_id: &PlaceId,
        rating: Rating,
        text: &str,
    ) -> Result<Review, ApiError>;

    /// Fetch a user for display. Failures are absorbed into `None`.
    async fn get_user(&self, id: &UserId) -> Option<User>;

    /// Whether the backend accepts this session token. True only on a
    /// successful response.
    async fn check_session(&self, token: &str) -> bool;

    /// Exchange credentials for a session token.
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    /// Best-effort logout; the caller navigates away regardless.
    async fn logout(&self, token: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("place p-1".to_string());
        assert_eq!(err.to_string(), "not found: place p-1");

        let err = ApiError::Conflict("You have already reviewed this place".to_string());
        assert_eq!(err.to_string(), "You have already reviewed this place");

        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned 500: boom");
    }

    #[test]
    fn test_transport_classification() {
        assert!(
            ApiError::Status {
                status: 502,
                message: String::new()
            }
            .is_transport()
        );
        assert!(!ApiError::Conflict(String::new()).is_transport());
        assert!(!ApiError::Unauthorized(String::new()).is_transport());
        assert!(!ApiError::NotFound(String::new()).is_transport());
    }
}
