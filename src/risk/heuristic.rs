//! Heuristic Risk Model
//!
//! Stand-in for a trained predictor. Each disease starts from a 50% baseline
//! and receives one bounded linear adjustment driven by a single nutrient,
//! then a uniform jitter, then clamping to [5, 95].
//!
//! | disease       | nutrient           | adjustment                  |
//! |---------------|--------------------|-----------------------------|
//! | heart_disease | fat                | (fat - 60) / 3              |
//! | diabetes      | carbs              | (carbs - 250) / 10          |
//! | hypertension  | minerals_potassium | (3500 - potassium) / 100    |
//! | obesity       | calories           | (calories - 2000) / 100     |
//! | anemia        | minerals_iron      | (15 - iron) / 2             |
//!
//! Adjustments are clamped to ±30 and skipped when the nutrient is absent.

use crate::data::NutrientSnapshot;
use crate::error::AssessmentError;
use crate::risk::scores::{Disease, DiseaseRiskScore};
use crate::risk::RiskModel;
use rand::{Rng, RngCore};

pub const BASELINE_RISK: f64 = 50.0;
pub const MAX_ADJUSTMENT: f64 = 30.0;
pub const MIN_RISK: f64 = 5.0;
pub const MAX_RISK: f64 = 95.0;
pub const DEFAULT_JITTER: f64 = 5.0;
/// Largest accepted jitter amplitude: the width of the score range
pub const MAX_JITTER: f64 = MAX_RISK - MIN_RISK;

/// Linear driver `(value - pivot) / scale`; a negative scale inverts the relationship
#[derive(Debug, Clone, Copy)]
struct RiskDriver {
    disease: Disease,
    nutrient: &'static str,
    pivot: f64,
    scale: f64,
}

static DRIVERS: [RiskDriver; 5] = [
    RiskDriver { disease: Disease::HeartDisease, nutrient: "fat", pivot: 60.0, scale: 3.0 },
    RiskDriver { disease: Disease::Diabetes, nutrient: "carbs", pivot: 250.0, scale: 10.0 },
    RiskDriver { disease: Disease::Hypertension, nutrient: "minerals_potassium", pivot: 3500.0, scale: -100.0 },
    RiskDriver { disease: Disease::Obesity, nutrient: "calories", pivot: 2000.0, scale: 100.0 },
    RiskDriver { disease: Disease::Anemia, nutrient: "minerals_iron", pivot: 15.0, scale: -2.0 },
];

/// Baseline-plus-adjustment risk estimator with bounded random jitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicRiskModel {
    jitter: f64,
}

impl Default for HeuristicRiskModel {
    fn default() -> Self {
        Self {
            jitter: DEFAULT_JITTER,
        }
    }
}

impl HeuristicRiskModel {
    /// Model with jitter drawn uniformly from `[-jitter, jitter]`
    ///
    /// `jitter` must lie in `[0, MAX_JITTER]`.
    pub fn new(jitter: f64) -> Result<Self, AssessmentError> {
        if !(0.0..=MAX_JITTER).contains(&jitter) {
            return Err(AssessmentError::InvalidJitter(jitter));
        }
        Ok(Self { jitter })
    }

    /// Fully deterministic model
    pub fn without_jitter() -> Self {
        Self { jitter: 0.0 }
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Nutrient-driven adjustment for one disease, before jitter
    ///
    /// Zero when the driving nutrient is absent from the snapshot.
    pub fn adjustment(snapshot: &NutrientSnapshot, disease: Disease) -> f64 {
        DRIVERS
            .iter()
            .find(|driver| driver.disease == disease)
            .and_then(|driver| {
                snapshot.resolve(driver.nutrient).map(|value| {
                    ((value - driver.pivot) / driver.scale).clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT)
                })
            })
            .unwrap_or(0.0)
    }

    fn sample_jitter(&self, rng: &mut dyn RngCore) -> f64 {
        if self.jitter > 0.0 {
            rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        }
    }
}

impl RiskModel for HeuristicRiskModel {
    fn estimate(&self, snapshot: &NutrientSnapshot, rng: &mut dyn RngCore) -> DiseaseRiskScore {
        Disease::ALL
            .iter()
            .map(|&disease| {
                let risk = BASELINE_RISK
                    + Self::adjustment(snapshot, disease)
                    + self.sample_jitter(rng);
                (disease.as_str(), risk.clamp(MIN_RISK, MAX_RISK))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pivot_snapshot() -> NutrientSnapshot {
        NutrientSnapshot::new()
            .with_value("fat", 60.0)
            .with_value("carbs", 250.0)
            .with_value("calories", 2000.0)
            .with_group_value("minerals", "iron", 15.0)
            .with_group_value("minerals", "potassium", 3500.0)
    }

    #[test]
    fn test_pivot_values_without_jitter_give_baseline() {
        let mut rng = StdRng::seed_from_u64(7);
        let risk = HeuristicRiskModel::without_jitter().estimate(&pivot_snapshot(), &mut rng);

        assert_eq!(risk.len(), 5);
        for (_, score) in risk.iter() {
            assert_relative_eq!(score, 50.0);
        }
    }

    #[test]
    fn test_adjustment_directions() {
        let snapshot = NutrientSnapshot::new()
            .with_value("fat", 90.0)
            .with_value("carbs", 100.0)
            .with_value("calories", 1500.0)
            .with_group_value("minerals", "iron", 20.0)
            .with_group_value("minerals", "potassium", 4000.0);

        assert_relative_eq!(HeuristicRiskModel::adjustment(&snapshot, Disease::HeartDisease), 10.0);
        assert_relative_eq!(HeuristicRiskModel::adjustment(&snapshot, Disease::Diabetes), -15.0);
        assert_relative_eq!(HeuristicRiskModel::adjustment(&snapshot, Disease::Obesity), -5.0);
        assert_relative_eq!(HeuristicRiskModel::adjustment(&snapshot, Disease::Anemia), -2.5);
        assert_relative_eq!(HeuristicRiskModel::adjustment(&snapshot, Disease::Hypertension), -5.0);
    }

    #[test]
    fn test_adjustment_is_clamped() {
        let snapshot = NutrientSnapshot::new()
            .with_value("fat", 10_000.0)
            .with_group_value("minerals", "potassium", 0.0);

        assert_relative_eq!(HeuristicRiskModel::adjustment(&snapshot, Disease::HeartDisease), 30.0);
        assert_relative_eq!(HeuristicRiskModel::adjustment(&snapshot, Disease::Hypertension), 30.0);
    }

    #[test]
    fn test_absent_nutrient_skips_adjustment() {
        let empty = NutrientSnapshot::new();
        for disease in Disease::ALL {
            assert_eq!(HeuristicRiskModel::adjustment(&empty, disease), 0.0);
        }

        // Present but zero is not the same as absent
        let zero_iron = NutrientSnapshot::new().with_value("minerals_iron", 0.0);
        assert_relative_eq!(HeuristicRiskModel::adjustment(&zero_iron, Disease::Anemia), 7.5);
    }

    #[test]
    fn test_jitter_stays_within_amplitude() {
        let model = HeuristicRiskModel::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let risk = model.estimate(&pivot_snapshot(), &mut rng);
            for (_, score) in risk.iter() {
                assert!((45.0..=55.0).contains(&score), "score {} outside jitter band", score);
            }
        }
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let model = HeuristicRiskModel::new(40.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for i in 0..500 {
            let scale = (i as f64) * 37.0;
            let snapshot = NutrientSnapshot::new()
                .with_value("fat", scale)
                .with_value("carbs", 5_000.0 - scale)
                .with_value("calories", scale * 3.0)
                .with_value("minerals_iron", 100.0 - scale)
                .with_value("minerals_potassium", scale * 2.0);

            for (_, score) in model.estimate(&snapshot, &mut rng).iter() {
                assert!((MIN_RISK..=MAX_RISK).contains(&score));
            }
        }
    }

    #[test]
    fn test_same_seed_same_scores() {
        let model = HeuristicRiskModel::default();
        let a = model.estimate(&pivot_snapshot(), &mut StdRng::seed_from_u64(11));
        let b = model.estimate(&pivot_snapshot(), &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_invalid_jitter() {
        assert_eq!(
            HeuristicRiskModel::new(-1.0).unwrap_err(),
            AssessmentError::InvalidJitter(-1.0)
        );
        assert!(HeuristicRiskModel::new(f64::INFINITY).is_err());
        assert!(HeuristicRiskModel::new(f64::NAN).is_err());
        assert_eq!(
            HeuristicRiskModel::new(1e308).unwrap_err(),
            AssessmentError::InvalidJitter(1e308)
        );
        assert!(HeuristicRiskModel::new(MAX_JITTER + 0.5).is_err());
        assert!(HeuristicRiskModel::new(0.0).is_ok());
        assert!(HeuristicRiskModel::new(MAX_JITTER).is_ok());
    }

    #[test]
    fn test_widest_jitter_stays_in_bounds() {
        let model = HeuristicRiskModel::new(MAX_JITTER).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            for (_, score) in model.estimate(&pivot_snapshot(), &mut rng).iter() {
                assert!((MIN_RISK..=MAX_RISK).contains(&score));
            }
        }
    }
}
