//! Disease risk estimation
//!
//! `RiskModel` is the seam between the recommendation pipeline and whatever
//! produces risk scores. The only implementation today is the
//! `HeuristicRiskModel`; a trained predictor would implement the same trait.

pub mod scores;
pub mod heuristic;

pub use scores::{Disease, DiseaseRiskScore, RiskLevel};
pub use heuristic::HeuristicRiskModel;

use crate::data::NutrientSnapshot;
use rand::RngCore;

/// Maps a nutrient snapshot to per-disease risk scores
///
/// All randomness must come from `rng` so callers can seed it.
pub trait RiskModel: Send + Sync {
    fn estimate(&self, snapshot: &NutrientSnapshot, rng: &mut dyn RngCore) -> DiseaseRiskScore;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}
