//! Session layer and token access.
//!
//! The session holds exactly one value: the opaque bearer token the
//! backend issued at login. Whether that token is still accepted is
//! re-checked against the backend for every gating decision; nothing
//! here caches authentication state.

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::warn;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "casabnb_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Session key under which the backend token is stored.
const TOKEN_KEY: &str = "token";

/// Create the session layer with an in-memory store.
///
/// Sessions only carry the backend token, so losing them on restart just
/// means logging in again.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// The stored backend token, if any.
///
/// Session read failures are treated as "no token"; gating then resolves
/// to the unauthenticated path instead of erroring the page.
pub async fn auth_token(session: &Session) -> Option<String> {
    match session.get::<String>(TOKEN_KEY).await {
        Ok(token) => token,
        Err(err) => {
            warn!(error = %err, "session read failed, treating as logged out");
            None
        }
    }
}

/// Store the backend token after a successful login.
///
/// # Errors
///
/// Returns the session-store error when the token cannot be persisted.
pub async fn store_token(
    session: &Session,
    token: String,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(TOKEN_KEY, token).await
}

/// Drop the session entirely (logout).
pub async fn clear(session: &Session) {
    if let Err(err) = session.flush().await {
        warn!(error = %err, "session clear failed, continuing with redirect");
    }
}
