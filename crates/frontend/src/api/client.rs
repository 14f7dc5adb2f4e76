//! Reqwest implementation of the rental backend API.

use std::sync::Arc;

use casabnb_core::{Place, PlaceId, Rating, Review, User, UserId};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::{ApiError, RentalApi};

/// Client for the rental backend REST API.
///
/// Cheaply cloneable; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape used by the backend (`{"error": "..."}` or
/// occasionally `{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl BackendClient {
    /// Create a new client for the given API base URL
    /// (e.g. `http://localhost:5000/api/v1`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                http: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Send a request and parse the JSON body.
    ///
    /// The body is read as text first so parse failures and error statuses
    /// can be logged with what the backend actually sent.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            let message = extract_error_message(&text, status);
            warn!(status, message = %message, "backend returned non-success status");
            return Err(classify_status(status, message));
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    body = %text.chars().take(500).collect::<String>(),
                    "failed to parse backend response"
                );
                Err(ApiError::Parse(err))
            }
        }
    }
}

impl RentalApi for BackendClient {
    #[instrument(skip(self))]
    async fn list_places(&self) -> Result<Vec<Place>, ApiError> {
        self.send_json(self.inner.http.get(self.url("/places"))).await
    }

    #[instrument(skip(self), fields(place_id = %id))]
    async fn get_place(&self, id: &PlaceId) -> Result<Place, ApiError> {
        self.send_json(self.inner.http.get(self.url(&format!("/places/{id}"))))
            .await
    }

    #[instrument(skip(self), fields(place_id = %place_id))]
    async fn list_reviews(&self, place_id: &PlaceId) -> Result<Vec<Review>, ApiError> {
        self.send_json(
            self.inner
                .http
                .get(self.url(&format!("/places/{place_id}/reviews"))),
        )
        .await
    }

    #[instrument(skip(self, token, text), fields(place_id = %place_id, rating = %rating))]
    async fn create_review(
        &self,
        token: &str,
        place_id: &PlaceId,
        rating: Rating,
        text: &str,
    ) -> Result<Review, ApiError> {
        let body = serde_json::json!({
            "place_id": place_id,
            "rating": rating.value(),
            "text": text,
        });
        self.send_json(
            self.inner
                .http
                .post(self.url("/reviews/"))
                .bearer_auth(token)
                .json(&body),
        )
        .await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn get_user(&self, id: &UserId) -> Option<User> {
        match self
            .send_json::<User>(self.inner.http.get(self.url(&format!("/users/{id}"))))
            .await
        {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = %err, "user lookup failed, displaying placeholder");
                None
            }
        }
    }

    #[instrument(skip(self, token))]
    async fn check_session(&self, token: &str) -> bool {
        match self
            .inner
            .http
            .get(self.url("/auth/protected"))
            .bearer_auth(token)
            .send()
            .await
        {
            Ok(response) => {
                let authenticated = response.status().is_success();
                debug!(authenticated, "session check resolved");
                authenticated
            }
            Err(err) => {
                warn!(error = %err, "session check unreachable, treating as unauthenticated");
                false
            }
        }
    }

    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct LoginResponse {
            access_token: String,
        }

        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self
            .send_json(self.inner.http.post(self.url("/auth/login")).json(&body))
            .await?;
        Ok(response.access_token)
    }

    #[instrument(skip(self, token))]
    async fn logout(&self, token: &str) {
        // Best-effort: the session cookie is cleared and the user is sent
        // to the login page whether or not the backend heard about it.
        match self
            .inner
            .http
            .post(self.url("/auth/logout"))
            .bearer_auth(token)
            .send()
            .await
        {
            Ok(response) => debug!(status = %response.status(), "logout call completed"),
            Err(err) => warn!(error = %err, "logout call failed, continuing"),
        }
    }
}

/// Map a non-success status to the error taxonomy.
fn classify_status(status: u16, message: String) -> ApiError {
    match status {
        404 => ApiError::NotFound(message),
        409 => ApiError::Conflict(message),
        401 | 403 => ApiError::Unauthorized(message),
        _ => ApiError::Status { status, message },
    }
}

/// Pull a human-readable message out of a backend error body, falling
/// back to the status code when the body is not the expected JSON.
fn extract_error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(404, "gone".into()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            classify_status(409, "dup".into()),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            classify_status(401, "no".into()),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            classify_status(403, "no".into()),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            classify_status(500, "boom".into()),
            ApiError::Status { status: 500, .. }
        ));
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error": "Place not found"}"#, 404),
            "Place not found"
        );
        assert_eq!(
            extract_error_message(r#"{"message": "nope"}"#, 400),
            "nope"
        );
        assert_eq!(extract_error_message("<html>oops</html>", 502), "HTTP 502");
        assert_eq!(extract_error_message(r"{}", 500), "HTTP 500");
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = BackendClient::new("http://localhost:5000/api/v1/");
        assert_eq!(client.url("/places"), "http://localhost:5000/api/v1/places");
    }
}
