//! Static nutrition reference data
//!
//! - `lookup_tables`: embedded ranges, condition links and food sources
//! - `tables`: validated `ReferenceTables` (embedded or loaded from JSON)
//! - `food_sources`: the food source catalog

pub mod lookup_tables;
pub mod tables;
pub mod food_sources;

pub use tables::{Deviation, ReferenceRange, ReferenceTables};
pub use food_sources::FoodSourceCatalog;
