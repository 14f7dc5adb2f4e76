//! Core domain types for CasaBnB.

pub mod id;
pub mod place;
pub mod review;
pub mod user;

pub use id::{PlaceId, ReviewId, UserId};
pub use place::{Amenity, Place};
pub use review::{InvalidRating, Rating, Review};
pub use user::User;
