pub mod model;
pub mod service;

pub use model::{GameFilters, ListType, QueryPolicy, SortClause, SortDirection};
pub use service::*;
