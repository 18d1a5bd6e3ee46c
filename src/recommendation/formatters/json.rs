use crate::recommendation::types::Assessment;

/// JSON formatter for assessments
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format assessment as pretty-printed JSON
    pub fn format(assessment: &Assessment) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(assessment)
    }

    /// Format assessment as compact JSON (no whitespace)
    pub fn format_compact(assessment: &Assessment) -> Result<String, serde_json::Error> {
        serde_json::to_string(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::types::{Recommendation, RecommendationSet};
    use crate::reference::{Deviation, FoodSourceCatalog};
    use crate::risk::DiseaseRiskScore;

    fn sample() -> Assessment {
        let mut recommendations = RecommendationSet::new();
        recommendations.push(
            "calories",
            Recommendation {
                current: 3000.0,
                target: 2500.0,
                unit: "kcal".to_string(),
                diseases: vec!["obesity".to_string(), "diabetes".to_string()],
                importance: 5.5,
                deviation: Deviation::Above,
            },
        );

        Assessment {
            predictions: vec![("obesity", 60.0), ("diabetes", 50.0)].into_iter().collect(),
            recommendations,
            food_sources: FoodSourceCatalog::builtin(),
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&sample()).unwrap();

        assert!(json.contains("\"obesity\": 60.0"));
        assert!(json.contains("\"target\": 2500.0"));
        assert!(json.contains("\"deviation\": \"above\""));
        assert!(json.contains("\"minerals_iron\": \"Red meat"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&sample()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommendations"]["calories"]["current"], 3000.0);
        assert_eq!(value["predictions"]["obesity"], 60.0);
    }

    #[test]
    fn test_empty_predictions_serialize_as_empty_object() {
        let assessment = Assessment {
            predictions: DiseaseRiskScore::empty(),
            recommendations: RecommendationSet::new(),
            food_sources: FoodSourceCatalog::default(),
        };
        let json = JsonFormatter::format_compact(&assessment).unwrap();
        assert_eq!(json, r#"{"predictions":{},"recommendations":{},"food_sources":{}}"#);
    }
}
