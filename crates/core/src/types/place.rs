//! Rental place listings as served by the backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{PlaceId, UserId};

/// A rental listing.
///
/// Cached read-only copy of the backend record. The list endpoint omits
/// some fields, so everything beyond the identity/price core is defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Price per night, non-negative, in the site currency.
    pub price: Decimal,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub owner_id: UserId,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl Place {
    /// Coordinates of the place, if the backend provided both halves.
    #[must_use]
    pub fn location(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// An amenity attached to a place. Only the name is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_deserializes_backend_json() {
        let json = r#"{
            "id": "p-1",
            "title": "Sea view flat",
            "description": "Two rooms near the port",
            "price": 80.0,
            "latitude": 43.3,
            "longitude": 5.4,
            "owner_id": "u-1",
            "amenities": [{"id": "a-1", "name": "Wifi"}]
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, PlaceId::new("p-1"));
        assert_eq!(place.price, Decimal::from(80));
        assert_eq!(place.location(), Some((43.3, 5.4)));
        assert_eq!(place.amenities[0].name, "Wifi");
    }

    #[test]
    fn test_place_tolerates_sparse_listing_fields() {
        let json = r#"{"id": "p-2", "title": "Cabin", "price": 45, "owner_id": "u-9"}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.description, "");
        assert_eq!(place.location(), None);
        assert!(place.amenities.is_empty());
    }
}
