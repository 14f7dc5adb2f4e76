//! HTTP route handlers for the frontend.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Index shell (nav, filter control, loading state)
//! GET  /places              - Catalog fragment (HTMX); ?max_price= filters
//!                             the cached catalog without refetching
//! GET  /place/{id}          - Place detail page
//! GET  /place/{id}/review   - Review composition form (auth-gated)
//! POST /place/{id}/review   - Submit a review
//! GET  /login               - Login page
//! POST /login               - Login action
//! POST /logout              - Logout action (best-effort, then redirect)
//! ```

pub mod auth;
pub mod home;
pub mod places;
pub mod reviews;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the frontend router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/places", get(home::place_list))
        .route("/place/{id}", get(places::show))
        .route(
            "/place/{id}/review",
            get(reviews::compose).post(reviews::submit),
        )
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}
