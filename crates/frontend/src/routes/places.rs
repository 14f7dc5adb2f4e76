//! Place detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use casabnb_core::{PlaceId, Review};
use tower_sessions::Session;
use tracing::warn;

use crate::api::RentalApi;
use crate::error::Result;
use crate::gate::{self, GateState};
use crate::state::AppState;
use crate::{rating, render, session};

/// One review entry on the detail page.
pub struct ReviewCardView {
    pub stars: String,
    pub text: String,
}

/// Place detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "place.html")]
pub struct PlaceTemplate {
    pub logged_in: bool,
    pub place_id: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub host_name: String,
    pub location_label: String,
    pub amenities: Vec<String>,
    pub rating_label: String,
    pub reviews: Vec<ReviewCardView>,
    pub gate: GateState,
}

fn review_cards(reviews: &[Review]) -> Vec<ReviewCardView> {
    reviews
        .iter()
        .map(|review| ReviewCardView {
            stars: "★".repeat(usize::from(review.rating.value())),
            text: review.text.clone(),
        })
        .collect()
}

/// Display the detail page of one place.
///
/// The place, its reviews and the session check are independent fetches
/// and run concurrently. A review failure is isolated to an empty list;
/// the host is looked up lazily once the place is known.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response> {
    let place_id = PlaceId::new(id);
    let token = session::auth_token(&session).await;

    let (place, reviews, gate) = tokio::join!(
        state.api().get_place(&place_id),
        state.api().list_reviews(&place_id),
        gate::review_gate(state.api(), token.as_deref()),
    );

    let place = place?;
    let reviews = reviews.unwrap_or_else(|err| {
        warn!(place_id = %place_id, error = %err, "reviews unavailable for detail page");
        Vec::new()
    });

    let host_name = match state.api().get_user(&place.owner_id).await {
        Some(user) => user.full_name(),
        None => "Unknown host".to_string(),
    };

    let location_label = place
        .location()
        .map_or_else(|| "Unknown".to_string(), |(lat, lon)| format!("{lat}, {lon}"));

    let page = PlaceTemplate {
        logged_in: gate.is_enabled(),
        place_id: place.id.to_string(),
        title: place.title,
        description: place.description,
        price_label: render::price_label(&place.price),
        host_name,
        location_label,
        amenities: place.amenities.into_iter().map(|a| a.name).collect(),
        rating_label: rating::aggregate(&reviews).stars(),
        reviews: review_cards(&reviews),
        gate,
    };

    Ok(page.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use casabnb_core::{Rating, ReviewId, UserId};

    fn page(gate: GateState) -> PlaceTemplate {
        PlaceTemplate {
            logged_in: gate.is_enabled(),
            place_id: "p-1".to_string(),
            title: "Sea view flat".to_string(),
            description: "Two rooms near the port".to_string(),
            price_label: "80 € / night".to_string(),
            host_name: "Ada Lovelace".to_string(),
            location_label: "43.3, 5.4".to_string(),
            amenities: vec!["Wifi".to_string()],
            rating_label: "★★★★½".to_string(),
            reviews: Vec::new(),
            gate,
        }
    }

    #[test]
    fn test_disabled_gate_shows_login_prompt() {
        let html = page(GateState::Disabled).render().unwrap();
        assert!(html.contains("disabled"));
        assert!(html.contains("Log in to leave a review."));
    }

    #[test]
    fn test_enabled_gate_links_to_review_form() {
        let html = page(GateState::Enabled).render().unwrap();
        assert!(html.contains("/place/p-1/review"));
        assert!(!html.contains("Log in to leave a review."));
    }

    #[test]
    fn test_review_cards_repeat_full_stars() {
        let cards = review_cards(&[Review {
            id: ReviewId::new("r-1"),
            place_id: PlaceId::new("p-1"),
            user_id: UserId::new("u-1"),
            rating: Rating::new(3).unwrap(),
            text: "fine".to_string(),
        }]);
        assert_eq!(cards[0].stars, "★★★");
    }
}
