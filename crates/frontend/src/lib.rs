//! CasaBnB frontend library.
//!
//! This crate provides the frontend functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod gate;
pub mod rating;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
