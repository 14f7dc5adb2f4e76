//! Index page and catalog fragment handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::warn;

use crate::filter::{self, PriceLimit};
use crate::render::{self, CatalogErrorTemplate, PlaceListTemplate};
use crate::state::AppState;
use crate::{gate, session};

/// One entry of the price-filter control.
pub struct FilterOptionView {
    pub value: String,
    pub label: String,
}

/// Index page template: nav, filter control and the catalog region with
/// its loading placeholder.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub logged_in: bool,
    pub options: Vec<FilterOptionView>,
}

/// Query parameters of the catalog fragment.
#[derive(Debug, Deserialize)]
pub struct PlaceListQuery {
    pub max_price: Option<String>,
}

fn filter_options() -> Vec<FilterOptionView> {
    filter::options()
        .into_iter()
        .map(|option| FilterOptionView {
            value: option.as_value(),
            label: match option {
                PriceLimit::NoMax => "All prices".to_string(),
                PriceLimit::Max(max) => format!("Up to {max} €"),
            },
        })
        .collect()
}

/// Display the index shell.
///
/// The catalog itself arrives through the `/places` fragment, so the
/// auth check here and the catalog load run as independent request
/// chains; neither blocks the other.
pub async fn index(State(state): State<AppState>, session: Session) -> IndexTemplate {
    let token = session::auth_token(&session).await;
    let logged_in = gate::is_authenticated(state.api(), token.as_deref()).await;

    IndexTemplate {
        logged_in,
        options: filter_options(),
    }
}

/// Display the catalog fragment.
///
/// Without a `max_price` parameter this is the initial page load and
/// triggers the full fetch-and-aggregate cycle. With one it is a filter
/// selection and must only re-render the already-cached catalog.
pub async fn place_list(
    State(state): State<AppState>,
    Query(query): Query<PlaceListQuery>,
) -> Response {
    let snapshot = if query.max_price.is_some() {
        state.catalog().snapshot().await
    } else {
        if let Err(err) = state.catalog().reload().await {
            return CatalogErrorTemplate {
                message: err.to_string(),
            }
            .into_response();
        }
        state.catalog().snapshot().await
    };

    let limit = match query.max_price.as_deref() {
        None => PriceLimit::NoMax,
        Some(raw) => PriceLimit::parse(raw).unwrap_or_else(|| {
            warn!(raw, "unrecognized price filter value, showing everything");
            PriceLimit::NoMax
        }),
    };

    let visible = filter::apply(snapshot.places(), limit);
    let cards = render::place_cards(&visible, snapshot.reviews());

    PlaceListTemplate {
        cards,
        filtered: limit != PriceLimit::NoMax,
    }
    .into_response()
}
