pub mod catalog;
pub mod error;
pub mod model;
pub mod report;
pub mod session;
pub mod stats;

pub use error::{CatalogError, Result};
pub use model::*;
pub use stats::{PriceGroup, PriceStats};
