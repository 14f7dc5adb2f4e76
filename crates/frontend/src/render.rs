//! Catalog rendering.
//!
//! The projection from (visible places, cached reviews) to place cards is
//! a pure function; rendering the same inputs twice produces identical
//! markup, and each HTMX swap fully replaces the previous fragment. The
//! loading placeholder lives in the index shell, so "still loading",
//! "failed to load", "no places yet" and "no places match" are all
//! distinguishable states.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use casabnb_core::{Place, PlaceId, Review};
use rust_decimal::Decimal;

use crate::rating;

/// Display data for one place card in the catalog list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub rating_label: String,
}

/// Catalog list fragment, swapped into `#places-list`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/place_list.html")]
pub struct PlaceListTemplate {
    pub cards: Vec<PlaceCard>,
    /// Whether a price filter narrowed the view; selects the
    /// "no places match" message over "no places yet".
    pub filtered: bool,
}

/// Catalog error fragment, shown when the load cycle failed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/catalog_error.html")]
pub struct CatalogErrorTemplate {
    pub message: String,
}

/// Price with the site currency suffix.
#[must_use]
pub fn price_label(price: &Decimal) -> String {
    format!("{price} € / night")
}

/// Project the visible places and their cached reviews into cards.
///
/// The derived rating is recomputed from the review mapping on every
/// pass; places absent from the mapping render as unrated.
#[must_use]
pub fn place_cards(places: &[Place], reviews: &HashMap<PlaceId, Vec<Review>>) -> Vec<PlaceCard> {
    places
        .iter()
        .map(|place| {
            let place_reviews = reviews.get(&place.id).map_or(&[][..], Vec::as_slice);
            PlaceCard {
                id: place.id.to_string(),
                title: place.title.clone(),
                description: place.description.clone(),
                price_label: price_label(&place.price),
                rating_label: rating::aggregate(place_reviews).stars(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use casabnb_core::{Rating, ReviewId, UserId};

    use super::*;

    fn place(id: &str, price: u32) -> Place {
        Place {
            id: PlaceId::new(id),
            title: format!("Place {id}"),
            description: "A nice spot".to_string(),
            price: Decimal::from(price),
            latitude: None,
            longitude: None,
            owner_id: UserId::new("u-1"),
            amenities: Vec::new(),
        }
    }

    fn review(id: &str, place_id: &str, rating: u8) -> Review {
        Review {
            id: ReviewId::new(id),
            place_id: PlaceId::new(place_id),
            user_id: UserId::new("u-2"),
            rating: Rating::new(rating).unwrap(),
            text: String::new(),
        }
    }

    #[test]
    fn test_cards_carry_rating_and_price() {
        let places = vec![place("p-1", 80)];
        let mut reviews = HashMap::new();
        reviews.insert(
            PlaceId::new("p-1"),
            vec![review("r-1", "p-1", 5), review("r-2", "p-1", 4)],
        );

        let cards = place_cards(&places, &reviews);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].price_label, "80 € / night");
        assert_eq!(cards[0].rating_label, "★★★★½");
    }

    #[test]
    fn test_place_without_cached_reviews_is_unrated() {
        let cards = place_cards(&[place("p-1", 80)], &HashMap::new());
        assert_eq!(cards[0].rating_label, rating::NO_REVIEWS_LABEL);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let places = vec![place("p-1", 80), place("p-2", 300)];
        let reviews = HashMap::new();

        let first = PlaceListTemplate {
            cards: place_cards(&places, &reviews),
            filtered: false,
        }
        .render()
        .unwrap();
        let second = PlaceListTemplate {
            cards: place_cards(&places, &reviews),
            filtered: false,
        }
        .render()
        .unwrap();
        assert_eq!(first, second);
        assert!(first.contains("Place p-1"));
        assert!(first.contains("Place p-2"));
    }

    #[test]
    fn test_empty_states_are_distinguishable() {
        let empty_catalog = PlaceListTemplate {
            cards: Vec::new(),
            filtered: false,
        }
        .render()
        .unwrap();
        let empty_filter = PlaceListTemplate {
            cards: Vec::new(),
            filtered: true,
        }
        .render()
        .unwrap();
        assert_ne!(empty_catalog, empty_filter);
        assert!(empty_catalog.contains("No places yet"));
        assert!(empty_filter.contains("No places match"));
    }

    #[test]
    fn test_error_fragment_carries_message() {
        let html = CatalogErrorTemplate {
            message: "backend returned 502: bad gateway".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.contains("backend returned 502"));
    }
}
