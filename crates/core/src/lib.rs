//! CasaBnB Core - Shared domain types.
//!
//! This crate provides the read-only models the frontend caches from the
//! rental backend:
//! - Type-safe string IDs (`PlaceId`, `ReviewId`, `UserId`)
//! - `Place` with its amenities and optional location
//! - `Review` with a validated 1-5 `Rating`
//! - `User` (host display data, fetched lazily)
//!
//! All models deserialize from the backend's JSON wire format and are
//! owned by the backend; this crate never mutates them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
