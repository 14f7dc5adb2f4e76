//! Reviews and their validated ratings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::{PlaceId, ReviewId, UserId};

/// Rating outside the 1-5 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct InvalidRating(pub u8);

/// A review rating, guaranteed to be an integer between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values outside 1-5.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRating`] when `value` is 0 or greater than 5.
    pub fn new(value: u8) -> Result<Self, InvalidRating> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRating(value))
        }
    }

    /// The underlying 1-5 value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A review of a place, cached grouped by place identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub rating: Rating,
    /// Free-text comment. The backend allows it to be empty.
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        for v in 1..=5 {
            assert_eq!(Rating::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn test_rating_rejected_in_serde() {
        let err = serde_json::from_str::<Rating>("7").unwrap_err();
        assert!(err.to_string().contains("between 1 and 5"));
    }

    #[test]
    fn test_review_deserializes_backend_json() {
        let json = r#"{
            "id": "r-1",
            "place_id": "p-1",
            "user_id": "u-2",
            "rating": 4,
            "text": "Great stay"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating.value(), 4);
        assert_eq!(review.text, "Great stay");
    }
}
