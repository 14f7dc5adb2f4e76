//! Unified error handling.
//!
//! Route handlers return `Result<T, AppError>`. Every failure path ends
//! in a rendered page: transport failures surface as a visible error
//! block with the underlying message, never as a blank or silently empty
//! page.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::api::ApiError;

/// Application-level error type for the frontend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API operation failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Session store operation failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Render(#[from] askama::Error),

    /// Bad request from the client.
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Full-page error view.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    logged_in: bool,
    message: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Api(err) => match err {
                ApiError::NotFound(_) => StatusCode::NOT_FOUND,
                ApiError::Conflict(_) => StatusCode::CONFLICT,
                ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                ApiError::Http(_) | ApiError::Parse(_) | ApiError::Status { .. } => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::Session(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        }

        let page = ErrorPageTemplate {
            logged_in: false,
            message: self.to_string(),
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            // Rendering the error page itself failed; fall back to text.
            Err(_) => (status, self.to_string()).into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        fn status_of(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            status_of(AppError::Api(ApiError::NotFound("p-1".into()))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Api(ApiError::Conflict("dup".into()))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::Api(ApiError::Status {
                status: 500,
                message: "boom".into()
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(AppError::BadRequest("nope".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_page_contains_message() {
        let response = AppError::Api(ApiError::Status {
            status: 503,
            message: "backend down".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
