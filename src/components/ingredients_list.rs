//! Ingredient list inside the recipe detail modal.

use std::collections::HashSet;

use leptos::prelude::*;

use super::ingredient_nutrition::IngredientNutrition;
use crate::net::types::RecipeIngredient;

/// Ingredient lines with per-line expandable nutrition. Renders nothing when
/// the recipe has no lines.
#[component]
pub fn IngredientsList(ingredients: Vec<RecipeIngredient>) -> impl IntoView {
    let expanded = RwSignal::new(HashSet::<i64>::new());
    let toggle = move |id: i64| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    (!ingredients.is_empty()).then(|| {
        view! {
            <div class="ingredients">
                <h3 class="ingredients__title">"Ingredients"</h3>
                <div class="ingredients__list">
                    {ingredients
                        .into_iter()
                        .map(|line| {
                            let id = line.id;
                            let nutrition = line.ingredient.nutrition.clone();
                            let has_nutrition = nutrition.is_some();
                            let unit = line.unit.clone();
                            let is_expanded = move || expanded.with(|set| set.contains(&id));
                            view! {
                                <div class="ingredients__item">
                                    <div class="ingredients__row">
                                        <div class="ingredients__info">
                                            <span class="ingredients__name">{line.ingredient.name.clone()}</span>
                                            {line
                                                .ingredient
                                                .description
                                                .clone()
                                                .map(|description| {
                                                    view! {
                                                        <span class="ingredients__description">{description}</span>
                                                    }
                                                })}
                                        </div>
                                        <div class="ingredients__right">
                                            <span class="ingredients__amount">
                                                {format!("{} {}", line.quantity, line.unit)}
                                            </span>
                                            {has_nutrition
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class=move || {
                                                                if is_expanded() {
                                                                    "ingredients__toggle ingredients__toggle--active"
                                                                } else {
                                                                    "ingredients__toggle"
                                                                }
                                                            }
                                                            on:click=move |_| toggle(id)
                                                        >
                                                            {move || if is_expanded() { "−" } else { "+" }}
                                                        </button>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                    {line
                                        .preparation
                                        .clone()
                                        .map(|preparation| {
                                            view! {
                                                <p class="ingredients__preparation">{preparation}</p>
                                            }
                                        })}
                                    {move || {
                                        (is_expanded())
                                            .then(|| {
                                                nutrition
                                                    .clone()
                                                    .map(|nutrition| {
                                                        view! {
                                                            <IngredientNutrition
                                                                nutrition=nutrition
                                                                unit=unit.clone()
                                                            />
                                                        }
                                                    })
                                            })
                                    }}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}
