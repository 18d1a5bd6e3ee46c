use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use smallvec::SmallVec;
use std::fmt;

/// Scored disease categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disease {
    HeartDisease,
    Diabetes,
    Hypertension,
    Obesity,
    Anemia,
}

impl Disease {
    /// Every scored disease, in report order
    pub const ALL: [Disease; 5] = [
        Disease::HeartDisease,
        Disease::Diabetes,
        Disease::Hypertension,
        Disease::Obesity,
        Disease::Anemia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::HeartDisease => "heart_disease",
            Disease::Diabetes => "diabetes",
            Disease::Hypertension => "hypertension",
            Disease::Obesity => "obesity",
            Disease::Anemia => "anemia",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk band shown next to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Band a 0-100 risk score
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 70.0 => RiskLevel::High,
            s if s >= 30.0 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// Disease name → risk score, in insertion order
///
/// Produced once per snapshot and never mutated. An empty score set stands in
/// for an unavailable estimate; lookups of missing diseases return `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiseaseRiskScore {
    scores: SmallVec<[(String, f64); 5]>,
}

impl DiseaseRiskScore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, disease: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|(name, _)| name == disease)
            .map(|(_, score)| *score)
    }

    pub fn level(&self, disease: &str) -> Option<RiskLevel> {
        self.get(disease).map(RiskLevel::from_score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for DiseaseRiskScore {
    /// Later entries for the same disease replace earlier ones
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut scores: SmallVec<[(String, f64); 5]> = SmallVec::new();
        for (name, score) in iter {
            let name = name.into();
            match scores.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = score,
                None => scores.push((name, score)),
            }
        }
        Self { scores }
    }
}

impl Serialize for DiseaseRiskScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (name, score) in &self.scores {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}
