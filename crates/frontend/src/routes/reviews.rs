//! Review composition handlers (auth-gated).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use casabnb_core::{PlaceId, Rating};
use serde::Deserialize;
use tower_sessions::Session;

use crate::api::{ApiError, RentalApi};
use crate::error::Result;
use crate::session;
use crate::state::AppState;
use crate::gate;

/// Review form data.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: u8,
    #[serde(default)]
    pub text: String,
}

/// Review composition page template.
#[derive(Template, WebTemplate)]
#[template(path = "add_review.html")]
pub struct AddReviewTemplate {
    pub logged_in: bool,
    pub place_id: String,
    pub place_title: String,
    /// Warning-level message (duplicate review), styled distinctly from
    /// generic errors.
    pub warning: Option<String>,
    pub error: Option<String>,
}

async fn form_template(
    state: &AppState,
    place_id: &PlaceId,
    warning: Option<String>,
    error: Option<String>,
) -> Result<AddReviewTemplate> {
    let place = state.api().get_place(place_id).await?;
    Ok(AddReviewTemplate {
        logged_in: true,
        place_id: place.id.to_string(),
        place_title: place.title,
        warning,
        error,
    })
}

/// Display the review composition form.
///
/// Unauthenticated visitors are redirected to the login page instead of
/// seeing the gated view.
pub async fn compose(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response> {
    let token = session::auth_token(&session).await;
    if !gate::is_authenticated(state.api(), token.as_deref()).await {
        return Ok(Redirect::to("/login").into_response());
    }

    let place_id = PlaceId::new(id);
    Ok(form_template(&state, &place_id, None, None)
        .await?
        .into_response())
}

/// Submit a review.
///
/// A duplicate submission is a conflict, not a generic error: the form
/// re-renders with a warning. Auth failures redirect; the backend remains
/// the authority on what gets written.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Response> {
    let Some(token) = session::auth_token(&session).await else {
        return Ok(Redirect::to("/login").into_response());
    };

    let place_id = PlaceId::new(id);

    let rating = match Rating::new(form.rating) {
        Ok(rating) => rating,
        Err(err) => {
            return Ok(form_template(&state, &place_id, None, Some(err.to_string()))
                .await?
                .into_response());
        }
    };

    match state
        .api()
        .create_review(&token, &place_id, rating, &form.text)
        .await
    {
        Ok(_) => Ok(Redirect::to(&format!("/place/{place_id}")).into_response()),
        Err(ApiError::Conflict(message)) => {
            Ok(form_template(&state, &place_id, Some(message), None)
                .await?
                .into_response())
        }
        Err(ApiError::Unauthorized(_)) => Ok(Redirect::to("/login").into_response()),
        Err(err) => Err(err.into()),
    }
}
