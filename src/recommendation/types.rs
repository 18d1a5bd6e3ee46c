use crate::reference::{Deviation, FoodSourceCatalog};
use crate::risk::DiseaseRiskScore;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Complete result for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub predictions: DiseaseRiskScore,
    pub recommendations: RecommendationSet,
    pub food_sources: FoodSourceCatalog,
}

/// Advice for one nutrient outside its reference range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub current: f64,
    /// The violated boundary of the reference range
    pub target: f64,
    pub unit: String,
    pub diseases: Vec<String>,
    /// Urgency weight (0-10)
    pub importance: f64,
    pub deviation: Deviation,
}

/// Nutrient → recommendation, in reference table order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationSet {
    entries: Vec<(String, Recommendation)>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, nutrient: &str, recommendation: Recommendation) {
        self.entries.push((nutrient.to_string(), recommendation));
    }

    pub fn get(&self, nutrient: &str) -> Option<&Recommendation> {
        self.entries
            .iter()
            .find(|(key, _)| key == nutrient)
            .map(|(_, rec)| rec)
    }

    pub fn contains(&self, nutrient: &str) -> bool {
        self.get(nutrient).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recommendation)> {
        self.entries.iter().map(|(key, rec)| (key.as_str(), rec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by importance, highest first
    ///
    /// Uses the stable `sort_by`, so equal importances keep table order.
    pub fn by_importance(&self) -> Vec<(&str, &Recommendation)> {
        let mut sorted: Vec<(&str, &Recommendation)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.importance.total_cmp(&a.1.importance));
        sorted
    }
}

impl Serialize for RecommendationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (nutrient, rec) in &self.entries {
            map.serialize_entry(nutrient, rec)?;
        }
        map.end()
    }
}
