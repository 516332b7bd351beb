//! Shared state and HTTP plumbing for the gamedex lambdas.

pub mod config;
pub mod proxy;

pub use config::AppState;
