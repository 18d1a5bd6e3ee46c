//! Nutrition Assessor - main coordinator
//!
//! Wires the pipeline together: snapshot → risk model → recommendation
//! generator → assessment (risk, recommendations, food source table).
//! Includes both single-snapshot and parallel (Rayon) batch entry points.

use crate::config::AssessorConfig;
use crate::data::NutrientSnapshot;
use crate::error::AssessmentError;
use crate::recommendation::{Assessment, RecommendationGenerator, TextFormatter};
use crate::reference::{FoodSourceCatalog, ReferenceTables};
use crate::risk::{DiseaseRiskScore, HeuristicRiskModel, RiskModel};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use serde_json::Value;
use std::sync::Arc;

/// Main nutrition assessor
pub struct NutritionAssessor {
    tables: Arc<ReferenceTables>,
    model: Box<dyn RiskModel>,
    seed: Option<u64>,
}

impl Default for NutritionAssessor {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionAssessor {
    /// Embedded tables, default heuristic model, unseeded jitter
    pub fn new() -> Self {
        Self {
            tables: Arc::new(ReferenceTables::builtin().clone()),
            model: Box::new(HeuristicRiskModel::default()),
            seed: None,
        }
    }

    /// Build an assessor from configuration
    ///
    /// Loads and validates the reference tables file when one is configured.
    pub fn from_config(config: &AssessorConfig) -> Result<Self> {
        let model = HeuristicRiskModel::new(config.jitter)?;

        let mut assessor = Self::new().with_model(model);
        if let Some(path) = &config.tables_path {
            assessor = assessor.with_tables(ReferenceTables::load(path)?);
        }
        if let Some(seed) = config.seed {
            assessor = assessor.with_seed(seed);
        }

        tracing::info!(
            "Nutrition assessor ready: model={}, jitter={}, seeded={}, reference ranges={}",
            assessor.model.name(),
            config.jitter,
            config.seed.is_some(),
            assessor.tables.len()
        );

        Ok(assessor)
    }

    pub fn with_model<M: RiskModel + 'static>(mut self, model: M) -> Self {
        self.model = Box::new(model);
        self
    }

    pub fn with_tables(mut self, tables: ReferenceTables) -> Self {
        self.tables = Arc::new(tables);
        self
    }

    /// Make jitter reproducible: every assessment with the same seed (and
    /// batch position) draws the same jitter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn food_sources(&self) -> &FoodSourceCatalog {
        self.tables.food_sources()
    }

    /// Risk scores only
    pub fn estimate_risk(&self, snapshot: &NutrientSnapshot) -> DiseaseRiskScore {
        let mut rng = self.rng_for(0);
        self.model.estimate(snapshot, &mut rng)
    }

    /// Assess one snapshot
    pub fn assess(&self, snapshot: &NutrientSnapshot) -> Assessment {
        let mut rng = self.rng_for(0);
        self.assess_with_rng(snapshot, &mut rng)
    }

    /// Assess one snapshot drawing jitter from `rng`
    pub fn assess_with_rng(&self, snapshot: &NutrientSnapshot, rng: &mut dyn RngCore) -> Assessment {
        let predictions = self.model.estimate(snapshot, rng);
        let recommendations =
            RecommendationGenerator::generate_with_tables(snapshot, &predictions, &self.tables);

        Assessment {
            predictions,
            recommendations,
            food_sources: self.tables.food_sources().clone(),
        }
    }

    /// Parse and assess a single JSON snapshot
    pub fn assess_json(&self, value: &Value) -> Result<Assessment, AssessmentError> {
        let snapshot = NutrientSnapshot::from_json(value)?;
        Ok(self.assess(&snapshot))
    }

    /// Assess many snapshots in parallel
    ///
    /// Output order matches input order. Seeded assessors offset the seed by
    /// row index so rows draw independent but reproducible jitter.
    pub fn assess_batch(&self, snapshots: &[NutrientSnapshot]) -> Vec<Assessment> {
        tracing::info!("Assessing batch of {} snapshots", snapshots.len());

        snapshots
            .par_iter()
            .enumerate()
            .map(|(i, snapshot)| {
                let mut rng = self.rng_for(i as u64);
                self.assess_with_rng(snapshot, &mut rng)
            })
            .collect()
    }

    /// Plain-text report for an assessment
    pub fn report(&self, assessment: &Assessment) -> String {
        TextFormatter::format(&assessment.recommendations, &assessment.food_sources)
    }

    fn rng_for(&self, index: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index)),
            None => StdRng::from_entropy(),
        }
    }
}
