//! Auth-state gating of UI affordances.
//!
//! Session state is a single boolean re-derived from the backend on
//! demand; it is never cached across gating decisions. The gate is
//! advisory at the UI layer - the backend independently rejects
//! unauthorized writes.

use tracing::instrument;

use crate::api::RentalApi;

/// State of an auth-gated control.
///
/// One-shot per page load: `Unknown` while the session query is pending,
/// then `Enabled` or `Disabled`. The gate does not poll afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Session query not resolved yet.
    #[default]
    Unknown,
    /// Session is authenticated; the gated action is available.
    Enabled,
    /// Not authenticated; the control is shown disabled with a login prompt.
    Disabled,
}

impl GateState {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Resolve the gate for the "add review" control.
///
/// A missing token short-circuits to `Disabled`; otherwise the backend
/// session check decides.
#[instrument(skip(api, token), fields(has_token = token.is_some()))]
pub async fn review_gate<C: RentalApi>(api: &C, token: Option<&str>) -> GateState {
    match token {
        None => GateState::Disabled,
        Some(token) => {
            if api.check_session(token).await {
                GateState::Enabled
            } else {
                GateState::Disabled
            }
        }
    }
}

/// Whether the current session is authenticated. Used for the login/logout
/// toggle in navigation and for redirecting away from gated views.
pub async fn is_authenticated<C: RentalApi>(api: &C, token: Option<&str>) -> bool {
    review_gate(api, token).await.is_enabled()
}
