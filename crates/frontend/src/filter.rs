//! Maximum-price filtering of the cached catalog.
//!
//! The thresholds are a fixed canonical ladder chosen to cover typical
//! nightly prices, not one entry per observed price. Filtering always
//! runs against the already-cached snapshot; changing the selection never
//! refetches from the backend.

use casabnb_core::Place;
use rust_decimal::Decimal;

/// Canonical maximum-price breakpoints, ascending, in the site currency.
pub const PRICE_LADDER: [u32; 6] = [10, 50, 100, 200, 500, 1500];

/// Query/form value for the "no maximum" option.
pub const NO_MAX_VALUE: &str = "all";

/// A maximum-price threshold selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLimit {
    /// Sentinel: show the full catalog.
    NoMax,
    /// Show only places priced at or below this value.
    Max(Decimal),
}

impl PriceLimit {
    /// Parse a filter-control value ("all" or a threshold number).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == NO_MAX_VALUE {
            return Some(Self::NoMax);
        }
        raw.parse::<Decimal>().ok().map(Self::Max)
    }

    /// Whether a place passes this filter (`price <= max`).
    #[must_use]
    pub fn admits(&self, place: &Place) -> bool {
        match self {
            Self::NoMax => true,
            Self::Max(max) => place.price <= *max,
        }
    }

    /// The value attribute used in the filter control.
    #[must_use]
    pub fn as_value(&self) -> String {
        match self {
            Self::NoMax => NO_MAX_VALUE.to_string(),
            Self::Max(max) => max.to_string(),
        }
    }
}

/// The selectable options: the "no maximum" sentinel first, then the
/// ladder in ascending order.
#[must_use]
pub fn options() -> Vec<PriceLimit> {
    std::iter::once(PriceLimit::NoMax)
        .chain(PRICE_LADDER.iter().map(|v| PriceLimit::Max(Decimal::from(*v))))
        .collect()
}

/// Narrow the cached catalog to the places the limit admits.
#[must_use]
pub fn apply(places: &[Place], limit: PriceLimit) -> Vec<Place> {
    places
        .iter()
        .filter(|place| limit.admits(place))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use casabnb_core::{PlaceId, UserId};

    use super::*;

    fn place(id: &str, price: u32) -> Place {
        Place {
            id: PlaceId::new(id),
            title: format!("Place {id}"),
            description: String::new(),
            price: Decimal::from(price),
            latitude: None,
            longitude: None,
            owner_id: UserId::new("u-1"),
            amenities: Vec::new(),
        }
    }

    #[test]
    fn test_options_start_with_no_max() {
        let options = options();
        assert_eq!(options[0], PriceLimit::NoMax);
        assert_eq!(options.len(), PRICE_LADDER.len() + 1);
        // Ladder stays ascending
        for pair in options[1..].windows(2) {
            assert!(pair[0].as_value().parse::<u32>().unwrap()
                < pair[1].as_value().parse::<u32>().unwrap());
        }
    }

    #[test]
    fn test_parse_round_trips_option_values() {
        for option in options() {
            assert_eq!(PriceLimit::parse(&option.as_value()), Some(option));
        }
        assert_eq!(PriceLimit::parse("not-a-number"), None);
    }

    #[test]
    fn test_threshold_keeps_places_at_or_below() {
        let catalog = vec![place("p-1", 80), place("p-2", 300)];

        let visible = apply(&catalog, PriceLimit::Max(Decimal::from(100)));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, PlaceId::new("p-1"));

        // Boundary: price == threshold is admitted
        let visible = apply(&catalog, PriceLimit::Max(Decimal::from(80)));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_no_max_shows_full_catalog() {
        let catalog = vec![place("p-1", 80), place("p-2", 300)];
        let visible = apply(&catalog, PriceLimit::NoMax);
        assert_eq!(visible, catalog);
    }

    #[test]
    fn test_filter_can_empty_the_view() {
        let catalog = vec![place("p-1", 80), place("p-2", 300)];
        let visible = apply(&catalog, PriceLimit::Max(Decimal::from(10)));
        assert!(visible.is_empty());
    }
}
