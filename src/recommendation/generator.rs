use crate::data::NutrientSnapshot;
use crate::recommendation::types::{Recommendation, RecommendationSet};
use crate::reference::ReferenceTables;
use crate::risk::DiseaseRiskScore;

/// Importance for nutrients with no linked conditions
pub const DEFAULT_IMPORTANCE: f64 = 5.0;
pub const MAX_IMPORTANCE: f64 = 10.0;

/// Turns a snapshot plus risk scores into nutrient recommendations
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Generate recommendations against the embedded reference tables
    pub fn generate(snapshot: &NutrientSnapshot, risk: &DiseaseRiskScore) -> RecommendationSet {
        Self::generate_with_tables(snapshot, risk, ReferenceTables::builtin())
    }

    /// Generate recommendations against caller-supplied tables
    ///
    /// Walks the reference ranges in table order. Nutrients within
    /// `[min, max]` (inclusive) are skipped; the rest get the violated
    /// boundary as target and an importance derived from linked disease risk.
    /// Absent nutrients count as zero intake.
    pub fn generate_with_tables(
        snapshot: &NutrientSnapshot,
        risk: &DiseaseRiskScore,
        tables: &ReferenceTables,
    ) -> RecommendationSet {
        let mut recommendations = RecommendationSet::new();

        for (nutrient, range) in tables.ranges() {
            let current = snapshot.value_or_zero(nutrient);

            let Some(deviation) = range.classify(current) else {
                continue;
            };

            let diseases = tables.diseases_for(nutrient);
            recommendations.push(
                nutrient,
                Recommendation {
                    current,
                    target: range.boundary(deviation),
                    unit: range.unit.clone(),
                    diseases: diseases.to_vec(),
                    importance: Self::importance(diseases, risk),
                    deviation,
                },
            );
        }

        tracing::debug!(
            "Generated {} recommendations from {} reference ranges",
            recommendations.len(),
            tables.len()
        );

        recommendations
    }

    /// Mean linked-disease risk rescaled to 0-10
    ///
    /// Diseases without a finite score contribute zero. With no linked diseases the
    /// importance is `DEFAULT_IMPORTANCE`.
    pub fn importance(diseases: &[String], risk: &DiseaseRiskScore) -> f64 {
        if diseases.is_empty() {
            return DEFAULT_IMPORTANCE;
        }

        let total: f64 = diseases
            .iter()
            .map(|disease| {
                risk.get(disease)
                    .filter(|score| score.is_finite())
                    .unwrap_or(0.0)
                    / 100.0
            })
            .sum();

        (total / diseases.len() as f64 * 10.0).clamp(0.0, MAX_IMPORTANCE)
    }
}
