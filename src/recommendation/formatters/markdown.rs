use crate::recommendation::formatters::text::{humanize, EMPTY_REPORT};
use crate::recommendation::types::Assessment;
use crate::reference::Deviation;
use crate::risk::RiskLevel;

/// Markdown formatter for full assessments
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format an assessment as markdown
    pub fn format(assessment: &Assessment) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Nutrition Risk Assessment\n\n");

        // Disease risk table
        md.push_str("## Disease Risk\n\n");
        if assessment.predictions.is_empty() {
            md.push_str("*No risk estimate available.*\n\n");
        } else {
            md.push_str("| Condition | Risk | Level |\n");
            md.push_str("|-----------|------|-------|\n");
            for (disease, score) in assessment.predictions.iter() {
                md.push_str(&format!(
                    "| {} | {:.1}% | {} |\n",
                    humanize(disease),
                    score,
                    RiskLevel::from_score(score).label()
                ));
            }
            md.push('\n');
        }

        // Recommendations
        md.push_str("## Recommendations\n\n");
        if assessment.recommendations.is_empty() {
            md.push_str(&format!("{}\n", EMPTY_REPORT));
            return md;
        }

        for (nutrient, rec) in assessment.recommendations.by_importance() {
            md.push_str(&format!(
                "### {} ({:.1}/10)\n\n",
                humanize(nutrient),
                rec.importance
            ));

            let action = match rec.deviation {
                Deviation::Below => "increase",
                Deviation::Above => "reduce",
            };
            md.push_str(&format!(
                "**Current:** {:.2} {} → **Target:** {:.2} {} ({})  \n",
                rec.current, rec.unit, rec.target, rec.unit, action
            ));

            if !rec.diseases.is_empty() {
                md.push_str(&format!("*Related conditions:* {}  \n", rec.diseases.join(", ")));
            }
            if let Some(sources) = assessment.food_sources.lookup(nutrient) {
                md.push_str(&format!("*Food sources:* {}  \n", sources));
            }
            md.push('\n');
        }

        md
    }
}
