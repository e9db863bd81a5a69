//! # pingpong
//!
//! Client layer for the ping-pong ranking service: the route table for the
//! ranking and matches views, and the HTTP client for the players and
//! matches endpoints.

pub mod api;
pub mod config;
pub mod router;
pub mod types;
pub mod views;

pub use api::{ApiClient, ApiError};
pub use config::ApiConfig;
