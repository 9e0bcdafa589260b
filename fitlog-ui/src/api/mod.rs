//! API Access
//!
//! Browser implementation of the fitness API.

pub mod client;

pub use client::{get_api_base, GlooApiClient};
