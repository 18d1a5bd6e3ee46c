//! Embedded Nutrition Reference Tables
//!
//! Daily reference ranges, nutrient → condition links and food sourcing advice
//! for the twelve tracked nutrients. Table order is significant: recommendation
//! sets are emitted in the order of `REFERENCE_RANGES`.


/// A healthy daily intake band for one nutrient
#[derive(Debug, Clone, Copy)]
pub struct NutrientRange {
    pub nutrient: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

// ============================================================================
// REFERENCE RANGES
// ============================================================================

static REFERENCE_RANGES: &[NutrientRange] = &[
    NutrientRange { nutrient: "calories", min: 1800.0, max: 2500.0, unit: "kcal" },
    NutrientRange { nutrient: "protein", min: 50.0, max: 100.0, unit: "g" },
    NutrientRange { nutrient: "carbs", min: 225.0, max: 325.0, unit: "g" },
    NutrientRange { nutrient: "fat", min: 44.0, max: 78.0, unit: "g" },
    NutrientRange { nutrient: "fiber", min: 25.0, max: 38.0, unit: "g" },
    NutrientRange { nutrient: "vitamins_a", min: 700.0, max: 900.0, unit: "µg RAE" },
    NutrientRange { nutrient: "vitamins_c", min: 75.0, max: 90.0, unit: "mg" },
    NutrientRange { nutrient: "vitamins_d", min: 15.0, max: 20.0, unit: "µg" },
    NutrientRange { nutrient: "vitamins_e", min: 15.0, max: 20.0, unit: "mg" },
    NutrientRange { nutrient: "minerals_iron", min: 8.0, max: 18.0, unit: "mg" },
    NutrientRange { nutrient: "minerals_calcium", min: 1000.0, max: 1300.0, unit: "mg" },
    NutrientRange { nutrient: "minerals_potassium", min: 3500.0, max: 4700.0, unit: "mg" },
];

// ============================================================================
// NUTRIENT → CONDITION LINKS
// Conditions outside the scored disease set (e.g. "fatigue") contribute zero
// risk to importance but are still listed on the recommendation.
// ============================================================================

static NUTRIENT_DISEASES: &[(&str, &[&str])] = &[
    ("calories", &["obesity", "diabetes"]),
    ("protein", &["anemia", "muscle_weakness"]),
    ("carbs", &["diabetes", "energy_levels"]),
    ("fat", &["heart_disease", "obesity"]),
    ("fiber", &["digestive_health", "heart_disease", "diabetes"]),
    ("vitamins_a", &["vision_problems", "immune_function"]),
    ("vitamins_c", &["immune_function", "wound_healing"]),
    ("vitamins_d", &["bone_health", "immune_function"]),
    ("vitamins_e", &["cell_damage", "heart_disease"]),
    ("minerals_iron", &["anemia", "fatigue"]),
    ("minerals_calcium", &["bone_health", "heart_function"]),
    ("minerals_potassium", &["hypertension", "heart_function"]),
];

// ============================================================================
// FOOD SOURCES
// ============================================================================

static FOOD_SOURCES: &[(&str, &str)] = &[
    ("calories", "Whole grains, nuts, avocados, olive oil, fatty fish"),
    ("protein", "Chicken, turkey, fish, eggs, Greek yogurt, tofu, legumes, quinoa"),
    ("carbs", "Brown rice, oats, sweet potatoes, quinoa, fruits, legumes"),
    ("fat", "Avocados, olive oil, nuts, seeds, fatty fish like salmon"),
    ("fiber", "Beans, lentils, whole grains, fruits, vegetables, nuts, seeds"),
    ("vitamins_a", "Sweet potatoes, carrots, spinach, kale, red bell peppers, mangoes"),
    ("vitamins_c", "Citrus fruits, strawberries, bell peppers, broccoli, kiwi"),
    ("vitamins_d", "Fatty fish, egg yolks, mushrooms, fortified milk and cereals"),
    ("vitamins_e", "Sunflower seeds, almonds, spinach, avocados, butternut squash"),
    ("minerals_iron", "Red meat, spinach, lentils, beans, fortified cereals, pumpkin seeds"),
    ("minerals_calcium", "Dairy products, fortified plant milks, tofu, leafy greens, almonds"),
    ("minerals_potassium", "Bananas, potatoes, spinach, avocados, beans, yogurt"),
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// All reference ranges in emission order
pub fn reference_ranges() -> &'static [NutrientRange] {
    REFERENCE_RANGES
}

/// Conditions linked to a nutrient, empty if the nutrient is unknown
///
/// # Examples
/// ```
/// use nutrition_advisor::reference::lookup_tables::linked_diseases;
///
/// assert_eq!(linked_diseases("fat"), &["heart_disease", "obesity"]);
/// assert!(linked_diseases("caffeine").is_empty());
/// ```
pub fn linked_diseases(nutrient: &str) -> &'static [&'static str] {
    NUTRIENT_DISEASES
        .iter()
        .find(|(key, _)| *key == nutrient)
        .map(|(_, diseases)| *diseases)
        .unwrap_or(&[])
}

pub fn nutrient_disease_links() -> &'static [(&'static str, &'static [&'static str])] {
    NUTRIENT_DISEASES
}

pub fn food_sources() -> &'static [(&'static str, &'static str)] {
    FOOD_SOURCES
}
