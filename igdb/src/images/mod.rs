pub mod model;
pub mod service;

pub use model::UpgradePolicy;
pub use service::*;
