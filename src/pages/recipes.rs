//! Recipe browsing page.
//!
//! DESIGN
//! ======
//! The list reloads whenever the category filter changes; the effect below
//! is the only reader of `selected_category` and the only writer of the
//! list/loading/error signals, so each filter click issues exactly one
//! request. Responses landing after unmount are dropped via the alive flag.

use leptos::prelude::*;

use crate::components::recipe_modal::RecipeModal;
use crate::net::types::Recipe;
use crate::state::recipes::{empty_list_message, ingredient_count_label, CATEGORIES};

#[component]
pub fn RecipesPage() -> impl IntoView {
    let selected_category = RwSignal::new("All".to_owned());
    let recipes = RwSignal::new(Vec::<Recipe>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected_recipe = RwSignal::new(None::<i64>);

    #[cfg(feature = "csr")]
    let alive = std::rc::Rc::new(std::cell::Cell::new(true));
    #[cfg(feature = "csr")]
    {
        let alive = std::rc::Rc::clone(&alive);
        on_cleanup(move || alive.set(false));
    }

    Effect::new(move || {
        let category = selected_category.get();
        loading.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        {
            let alive = std::rc::Rc::clone(&alive);
            leptos::task::spawn_local(async move {
                let query = crate::state::recipes::category_query(&category).map(str::to_owned);
                let result = crate::net::recipes::get_all(query.as_deref()).await;
                if !alive.get() {
                    return;
                }
                match result {
                    Ok(list) => recipes.set(list),
                    Err(err) => {
                        log::error!("failed to load recipes: {err}");
                        error.set(Some(err.user_message("Failed to load recipes")));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = category;
            loading.set(false);
        }
    });

    view! {
        <section class="recipes">
            <h1 class="recipes__title">"Recipes"</h1>
            <div class="recipes__filters">
                {CATEGORIES
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if selected_category.with(|selected| selected == category) {
                                        "recipes__filter recipes__filter--active"
                                    } else {
                                        "recipes__filter"
                                    }
                                }
                                on:click=move |_| selected_category.set(category.to_owned())
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                loading
                    .get()
                    .then(|| view! { <p class="recipes__status">"Loading recipes..."</p> })
            }}
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="recipes__error">{message}</p> })
            }}
            {move || {
                (!loading.get() && error.with(Option::is_none)
                    && recipes.with(Vec::is_empty))
                    .then(|| {
                        view! {
                            <p class="recipes__empty">
                                {selected_category.with(|selected| empty_list_message(selected))}
                            </p>
                        }
                    })
            }}
            <div class="recipes__grid">
                <For
                    each=move || recipes.get()
                    key=|recipe| recipe.id
                    let:recipe
                >
                    <div
                        class="recipe-card"
                        on:click=move |_| selected_recipe.set(Some(recipe.id))
                    >
                        <div class="recipe-card__header">
                            <h2 class="recipe-card__name">{recipe.name.clone()}</h2>
                            <span class="recipe-card__category">{recipe.category.clone()}</span>
                        </div>
                        <p class="recipe-card__description">{recipe.description.clone()}</p>
                        <span class="recipe-card__footer">
                            {ingredient_count_label(recipe.ingredients.len())}
                        </span>
                    </div>
                </For>
            </div>
            <RecipeModal selected=selected_recipe/>
        </section>
    }
}
