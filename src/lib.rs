//! Nutrition Advisor
//!
//! Dietary risk estimation and nutrient recommendations from a single
//! nutrition snapshot.
//!
//! Pipeline:
//! - `data/`: snapshot parsing (nested and flattened nutrient keys)
//! - `risk/`: per-disease risk scores behind the `RiskModel` trait
//! - `recommendation/`: out-of-range detection, importance weighting, formatters
//! - `reference/`: reference ranges, condition links, food source catalog
//! - `assessor`: coordinator tying the stages together
//!
//! The HTTP surface lives behind the `api` feature.

pub mod error;
pub mod data;
pub mod reference;
pub mod risk;
pub mod recommendation;
pub mod config;
pub mod assessor;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::AssessmentError;
pub use data::NutrientSnapshot;
pub use reference::{Deviation, FoodSourceCatalog, ReferenceRange, ReferenceTables};
pub use risk::{Disease, DiseaseRiskScore, HeuristicRiskModel, RiskLevel, RiskModel};
pub use recommendation::{
    Assessment, JsonFormatter, MarkdownFormatter, Recommendation, RecommendationGenerator,
    RecommendationSet, TextFormatter,
};
pub use config::AssessorConfig;
pub use assessor::NutritionAssessor;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
