//! Domain logic for the IGDB proxy: query building, image URL upgrading,
//! Twitch token acquisition, and the upstream call itself.
//!
//! Everything here takes its collaborators (HTTP client, credentials,
//! policies) as arguments rather than reading ambient state, so the lambda
//! layer is the only place that owns configuration.

pub mod api;
pub mod error;
pub mod images;
pub mod query;
pub mod twitch;

pub use error::{ProxyError, Result};
