//! Reference Tables
//!
//! Immutable configuration consumed by the recommendation generator:
//! reference ranges (in emission order), nutrient → condition links and the
//! food source catalog. Built once, either from the embedded tables or from a
//! JSON file, and validated before use.

use crate::error::AssessmentError;
use crate::reference::food_sources::FoodSourceCatalog;
use crate::reference::lookup_tables;
use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Healthy `[min, max]` band for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

/// Which side of a reference range a value falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deviation {
    Below,
    Above,
}

impl ReferenceRange {
    pub fn new(min: f64, max: f64, unit: &str) -> Self {
        Self {
            min,
            max,
            unit: unit.to_string(),
        }
    }

    /// `None` when `value` lies within `[min, max]` inclusive
    pub fn classify(&self, value: f64) -> Option<Deviation> {
        if value < self.min {
            Some(Deviation::Below)
        } else if value > self.max {
            Some(Deviation::Above)
        } else {
            None
        }
    }

    /// The boundary violated by a deviation
    pub fn boundary(&self, deviation: Deviation) -> f64 {
        match deviation {
            Deviation::Below => self.min,
            Deviation::Above => self.max,
        }
    }
}

/// Complete, validated reference configuration
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    ranges: Vec<(String, ReferenceRange)>,
    nutrient_diseases: FxHashMap<String, Vec<String>>,
    food_sources: FoodSourceCatalog,
}

/// On-disk layout of a reference tables file
#[derive(Debug, Deserialize)]
struct TablesFile {
    reference_ranges: Vec<RangeEntry>,
    #[serde(default)]
    nutrient_diseases: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    food_sources: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RangeEntry {
    nutrient: String,
    min: f64,
    max: f64,
    unit: String,
}

static BUILTIN: OnceLock<ReferenceTables> = OnceLock::new();

impl ReferenceTables {
    /// Build and validate tables from their parts
    pub fn new(
        ranges: Vec<(String, ReferenceRange)>,
        nutrient_diseases: FxHashMap<String, Vec<String>>,
        food_sources: FoodSourceCatalog,
    ) -> Result<Self, AssessmentError> {
        let tables = Self {
            ranges,
            nutrient_diseases,
            food_sources,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Embedded tables, constructed on first use and shared afterwards
    pub fn builtin() -> &'static ReferenceTables {
        BUILTIN.get_or_init(Self::from_embedded)
    }

    fn from_embedded() -> Self {
        let ranges = lookup_tables::reference_ranges()
            .iter()
            .map(|r| (r.nutrient.to_string(), ReferenceRange::new(r.min, r.max, r.unit)))
            .collect();

        let nutrient_diseases = lookup_tables::nutrient_disease_links()
            .iter()
            .map(|(nutrient, diseases)| {
                (
                    nutrient.to_string(),
                    diseases.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();

        Self {
            ranges,
            nutrient_diseases,
            food_sources: FoodSourceCatalog::builtin(),
        }
    }

    /// Load tables from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference tables: {:?}", path))?;

        let tables = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid reference tables in {:?}", path))?;

        tracing::info!(
            "Loaded {} reference ranges from {:?}",
            tables.ranges.len(),
            path
        );
        Ok(tables)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: TablesFile =
            serde_json::from_str(contents).with_context(|| "Failed to parse reference tables JSON")?;

        let ranges = file
            .reference_ranges
            .into_iter()
            .map(|e| (e.nutrient, ReferenceRange::new(e.min, e.max, &e.unit)))
            .collect();

        let tables = Self::new(
            ranges,
            file.nutrient_diseases.into_iter().collect(),
            file.food_sources.into_iter().collect(),
        )?;
        Ok(tables)
    }

    /// Check configuration invariants
    ///
    /// Bounds must be finite with `min <= max`, each nutrient defined once,
    /// and every condition link or food source must name a ranged nutrient.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        let mut seen = FxHashSet::default();

        for (nutrient, range) in &self.ranges {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(AssessmentError::NonFiniteBound {
                    nutrient: nutrient.clone(),
                });
            }
            if range.min > range.max {
                return Err(AssessmentError::InvalidReferenceRange {
                    nutrient: nutrient.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
            if !seen.insert(nutrient.as_str()) {
                return Err(AssessmentError::DuplicateNutrient {
                    nutrient: nutrient.clone(),
                });
            }
        }

        if let Some(unknown) = self.nutrient_diseases.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(AssessmentError::UnknownNutrient {
                nutrient: unknown.clone(),
                table: "nutrient_diseases",
            });
        }

        if let Some((unknown, _)) = self.food_sources.iter().find(|(k, _)| !seen.contains(k)) {
            return Err(AssessmentError::UnknownNutrient {
                nutrient: unknown.to_string(),
                table: "food_sources",
            });
        }

        Ok(())
    }

    /// Reference ranges in emission order
    pub fn ranges(&self) -> impl Iterator<Item = (&str, &ReferenceRange)> {
        self.ranges.iter().map(|(nutrient, range)| (nutrient.as_str(), range))
    }

    pub fn range(&self, nutrient: &str) -> Option<&ReferenceRange> {
        self.ranges
            .iter()
            .find(|(key, _)| key == nutrient)
            .map(|(_, range)| range)
    }

    /// Conditions linked to a nutrient (empty when none are mapped)
    pub fn diseases_for(&self, nutrient: &str) -> &[String] {
        self.nutrient_diseases
            .get(nutrient)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    pub fn food_sources(&self) -> &FoodSourceCatalog {
        &self.food_sources
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = ReferenceTables::builtin();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.len(), 12);

        let order: Vec<&str> = tables.ranges().map(|(n, _)| n).collect();
        assert_eq!(order.first(), Some(&"calories"));
        assert_eq!(order.last(), Some(&"minerals_potassium"));
    }

    #[test]
    fn test_classify_is_inclusive() {
        let range = ReferenceRange::new(1800.0, 2500.0, "kcal");
        assert_eq!(range.classify(1800.0), None);
        assert_eq!(range.classify(2500.0), None);
        assert_eq!(range.classify(1799.99), Some(Deviation::Below));
        assert_eq!(range.classify(2500.01), Some(Deviation::Above));
        assert_eq!(range.boundary(Deviation::Below), 1800.0);
        assert_eq!(range.boundary(Deviation::Above), 2500.0);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = ReferenceTables::new(
            vec![("fat".to_string(), ReferenceRange::new(80.0, 40.0, "g"))],
            FxHashMap::default(),
            FoodSourceCatalog::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            AssessmentError::InvalidReferenceRange {
                nutrient: "fat".to_string(),
                min: 80.0,
                max: 40.0
            }
        );
    }

    #[test]
    fn test_rejects_non_finite_and_duplicates() {
        let non_finite = ReferenceTables::new(
            vec![("fat".to_string(), ReferenceRange::new(f64::NAN, 40.0, "g"))],
            FxHashMap::default(),
            FoodSourceCatalog::default(),
        );
        assert!(matches!(non_finite, Err(AssessmentError::NonFiniteBound { .. })));

        let duplicate = ReferenceTables::new(
            vec![
                ("fat".to_string(), ReferenceRange::new(40.0, 80.0, "g")),
                ("fat".to_string(), ReferenceRange::new(40.0, 80.0, "g")),
            ],
            FxHashMap::default(),
            FoodSourceCatalog::default(),
        );
        assert!(matches!(duplicate, Err(AssessmentError::DuplicateNutrient { .. })));
    }

    #[test]
    fn test_rejects_links_to_unknown_nutrients() {
        let mut diseases = FxHashMap::default();
        diseases.insert("sodium".to_string(), vec!["hypertension".to_string()]);

        let err = ReferenceTables::new(
            vec![("fat".to_string(), ReferenceRange::new(40.0, 80.0, "g"))],
            diseases,
            FoodSourceCatalog::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AssessmentError::UnknownNutrient { table: "nutrient_diseases", .. }
        ));
    }

    #[test]
    fn test_rejects_food_sources_for_unknown_nutrients() {
        let catalog: FoodSourceCatalog = vec![
            ("fat".to_string(), "Olive oil".to_string()),
            ("sodium".to_string(), "Table salt".to_string()),
        ]
        .into_iter()
        .collect();

        let err = ReferenceTables::new(
            vec![("fat".to_string(), ReferenceRange::new(40.0, 80.0, "g"))],
            FxHashMap::default(),
            catalog,
        )
        .unwrap_err();

        assert_eq!(
            err,
            AssessmentError::UnknownNutrient {
                nutrient: "sodium".to_string(),
                table: "food_sources",
            }
        );
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "reference_ranges": [
                {"nutrient": "sodium", "min": 500, "max": 2300, "unit": "mg"},
                {"nutrient": "fat", "min": 44, "max": 78, "unit": "g"}
            ],
            "nutrient_diseases": {"sodium": ["hypertension"]},
            "food_sources": {"fat": "Olive oil"}
        }"#;

        let tables = ReferenceTables::from_json_str(json).unwrap();
        let order: Vec<&str> = tables.ranges().map(|(n, _)| n).collect();
        assert_eq!(order, vec!["sodium", "fat"]);
        assert_eq!(tables.diseases_for("sodium"), &["hypertension".to_string()]);
        assert!(tables.diseases_for("fat").is_empty());
        assert_eq!(tables.food_sources().lookup("fat"), Some("Olive oil"));
    }

    #[test]
    fn test_from_json_str_reports_invalid_range() {
        let json = r#"{"reference_ranges": [{"nutrient": "fat", "min": 90, "max": 10, "unit": "g"}]}"#;
        let err = ReferenceTables::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("fat"));
    }
}
