pub mod model;
pub mod service;

pub use model::{IgdbCredentials, TokenResponse};
pub use service::*;
