//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::api::{ApiError, RentalApi};
use crate::error::Result;
use crate::session;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub logged_in: bool,
    pub error: Option<String>,
}

/// Display the login page.
pub async fn login_page() -> LoginTemplate {
    LoginTemplate {
        logged_in: false,
        error: None,
    }
}

/// Authenticate against the backend and store the issued token.
///
/// Rejected or malformed credentials re-render the form with the
/// backend's message; transport failures get the error page.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.api().login(&form.email, &form.password).await {
        Ok(token) => {
            session::store_token(&session, token).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(ApiError::Unauthorized(message)) => Ok(LoginTemplate {
            logged_in: false,
            error: Some(message),
        }
        .into_response()),
        Err(ApiError::Status {
            status: 400,
            message,
        }) => Ok(LoginTemplate {
            logged_in: false,
            error: Some(message),
        }
        .into_response()),
        Err(err) => Err(err.into()),
    }
}

/// Log out: best-effort backend call, drop the session, and navigate to
/// the login page regardless of how the backend answered.
pub async fn logout(State(state): State<AppState>, session: Session) -> Redirect {
    if let Some(token) = session::auth_token(&session).await {
        state.api().logout(&token).await;
    }
    session::clear(&session).await;
    Redirect::to("/login")
}
