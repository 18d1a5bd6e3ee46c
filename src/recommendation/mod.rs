pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{Assessment, Recommendation, RecommendationSet};
pub use generator::RecommendationGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
