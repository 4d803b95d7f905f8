//! Expandable nutrition facts for one ingredient line.

#[cfg(test)]
#[path = "ingredient_nutrition_test.rs"]
mod ingredient_nutrition_test;

use leptos::prelude::*;

use crate::net::types::Nutrition;

/// Heading for the facts grid. Liquid units keep their own unit in the
/// label; everything else reads per 100g.
pub(crate) fn nutrition_label(unit: &str) -> String {
    if unit.eq_ignore_ascii_case("ml") {
        format!("Nutrition (per 100{unit})")
    } else {
        "Nutrition (per 100g)".to_owned()
    }
}

/// Rows to render, only for values the server sent.
pub(crate) fn nutrition_rows(nutrition: &Nutrition) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(calories) = nutrition.calories {
        rows.push(("Calories", format!("{calories} kcal")));
    }
    if let Some(protein) = nutrition.protein {
        rows.push(("Protein", format!("{protein}g")));
    }
    if let Some(carbs) = nutrition.carbs {
        rows.push(("Carbs", format!("{carbs}g")));
    }
    if let Some(fat) = nutrition.fat {
        rows.push(("Fat", format!("{fat}g")));
    }
    rows
}

/// Nutrition facts grid shown when an ingredient line is expanded.
#[component]
pub fn IngredientNutrition(nutrition: Nutrition, unit: String) -> impl IntoView {
    let label = nutrition_label(&unit);
    let rows = nutrition_rows(&nutrition);
    view! {
        <div class="nutrition">
            <h4 class="nutrition__title">{label}</h4>
            <div class="nutrition__grid">
                {rows
                    .into_iter()
                    .map(|(name, value)| {
                        view! {
                            <div class="nutrition__item">
                                <span class="nutrition__label">{name}</span>
                                <span class="nutrition__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
