use crate::reference::lookup_tables;
use serde::Serialize;
use std::collections::BTreeMap;

/// Nutrient → free-text food sourcing advice
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FoodSourceCatalog {
    entries: BTreeMap<String, String>,
}

impl FoodSourceCatalog {
    /// Catalog built from the embedded table
    pub fn builtin() -> Self {
        lookup_tables::food_sources()
            .iter()
            .map(|(nutrient, advice)| (nutrient.to_string(), advice.to_string()))
            .collect()
    }

    pub fn lookup(&self, nutrient: &str) -> Option<&str> {
        self.entries.get(nutrient).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for FoodSourceCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
