use crate::recommendation::types::RecommendationSet;
use crate::reference::FoodSourceCatalog;

pub const EMPTY_REPORT: &str = "No recommendations available.";

/// Plain-text console formatter for recommendation sets
pub struct TextFormatter;

impl TextFormatter {
    /// Render recommendations, most important first
    pub fn format(recommendations: &RecommendationSet, food_sources: &FoodSourceCatalog) -> String {
        if recommendations.is_empty() {
            return EMPTY_REPORT.to_string();
        }

        let mut out = String::with_capacity(256 * recommendations.len());
        out.push_str("=== NUTRITION RECOMMENDATIONS ===\n\n");

        for (nutrient, rec) in recommendations.by_importance() {
            out.push_str(&format!("• {}:\n", humanize(nutrient)));
            out.push_str(&format!("  Current: {:.2} {}\n", rec.current, rec.unit));
            out.push_str(&format!("  Target: {:.2} {}\n", rec.target, rec.unit));

            if let Some(sources) = food_sources.lookup(nutrient) {
                out.push_str(&format!("  Food sources: {}\n", sources));
            }

            if !rec.diseases.is_empty() {
                out.push_str(&format!("  Related conditions: {}\n", rec.diseases.join(", ")));
            }

            out.push_str(&format!("  Importance score: {:.1}/10\n\n", rec.importance));
        }

        out
    }
}

/// `minerals_iron` → `Minerals iron`
pub fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
