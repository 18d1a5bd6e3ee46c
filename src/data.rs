//! Nutrient Snapshot Parsing
//!
//! Converts caller-supplied JSON into a `NutrientSnapshot`: one subject's
//! nutrient readings at one point in time.
//!
//! Accepted shapes:
//! - Direct keys: `calories`, `protein`, `carbs`, `fat`, `fiber`
//! - Nested groups: `{"vitamins": {"a": ..}, "minerals": {"iron": ..}}`
//! - Flattened group keys: `vitamins_a`, `minerals_iron`
//!
//! Values that are not finite numbers are stored as zero. Unknown keys are
//! kept but never read by the engine.

use crate::error::{json_type_name, AssessmentError};
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::collections::BTreeMap;

/// Group prefixes that may appear nested (`vitamins.a`) or flattened (`vitamins_a`)
pub const NUTRIENT_GROUPS: [&str; 2] = ["vitamins", "minerals"];

/// One subject's nutrient readings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientSnapshot {
    /// Scalar values keyed as supplied (`fat`, `minerals_iron`, ...)
    values: FxHashMap<String, f64>,
    /// Nested group objects (`minerals` → `iron` → 20.0)
    groups: FxHashMap<String, FxHashMap<String, f64>>,
}

impl NutrientSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single snapshot from a JSON object
    pub fn from_json(value: &Value) -> Result<Self, AssessmentError> {
        let object = value.as_object().ok_or(AssessmentError::SnapshotNotObject {
            found: json_type_name(value),
        })?;

        let mut snapshot = Self::new();
        for (key, entry) in object {
            match entry {
                Value::Object(inner) => {
                    let group = inner
                        .iter()
                        .map(|(sub_key, sub_value)| (sub_key.clone(), numeric_or_zero(sub_value)))
                        .collect();
                    snapshot.groups.insert(key.clone(), group);
                }
                other => {
                    snapshot.values.insert(key.clone(), numeric_or_zero(other));
                }
            }
        }

        Ok(snapshot)
    }

    /// Parse one or more snapshots
    ///
    /// Accepts either a single object or an array of objects (one row per
    /// subject, the shape the prediction endpoint receives).
    pub fn batch_from_json(value: &Value) -> Result<Vec<Self>, AssessmentError> {
        match value {
            Value::Array(rows) => {
                if rows.is_empty() {
                    return Err(AssessmentError::EmptyBatch);
                }
                rows.iter().map(Self::from_json).collect()
            }
            Value::Object(_) => Ok(vec![Self::from_json(value)?]),
            other => Err(AssessmentError::SnapshotNotObject {
                found: json_type_name(other),
            }),
        }
    }

    /// Builder: set a direct (or already flattened) value
    pub fn with_value(mut self, key: &str, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder: set a value inside a nested group
    pub fn with_group_value(mut self, group: &str, key: &str, value: f64) -> Self {
        self.insert_grouped(group, key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), finite_or_zero(value));
    }

    pub fn insert_grouped(&mut self, group: &str, key: &str, value: f64) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), finite_or_zero(value));
    }

    /// Look up a nutrient, returning `None` when it is absent
    ///
    /// Grouped nutrients (`minerals_iron`) read the nested group when one
    /// exists; the flattened key is consulted only when there is no nested
    /// group at all.
    pub fn resolve(&self, nutrient: &str) -> Option<f64> {
        if let Some((category, specific)) = split_grouped_key(nutrient) {
            if let Some(group) = self.groups.get(category) {
                return group.get(specific).copied();
            }
        }
        self.values.get(nutrient).copied()
    }

    /// Look up a nutrient, treating absence as zero intake
    pub fn value_or_zero(&self, nutrient: &str) -> f64 {
        self.resolve(nutrient).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.groups.is_empty()
    }

    /// Flattened `category_specific` view of every stored value
    pub fn flattened(&self) -> BTreeMap<String, f64> {
        let mut flat: BTreeMap<String, f64> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();

        for (group, entries) in &self.groups {
            for (key, value) in entries {
                flat.insert(format!("{}_{}", group, key), *value);
            }
        }

        flat
    }
}

/// Split `minerals_iron` into (`minerals`, `iron`) for known groups only
fn split_grouped_key(nutrient: &str) -> Option<(&str, &str)> {
    nutrient
        .split_once('_')
        .filter(|(category, _)| NUTRIENT_GROUPS.contains(category))
}

fn numeric_or_zero(value: &Value) -> f64 {
    value.as_f64().map(finite_or_zero).unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
