//! Recipe detail modal.
//!
//! Fetches the full recipe (ingredients, nutrition) whenever a card is
//! selected. The fetch is not cancelable once issued, so an alive flag
//! guards against state writes after the modal's owner unmounts.

use leptos::prelude::*;

use super::ingredients_list::IngredientsList;
use crate::net::types::Recipe;

/// Overlay modal showing one recipe's detail; `selected` drives visibility
/// and is reset to `None` on close.
#[component]
pub fn RecipeModal(selected: RwSignal<Option<i64>>) -> impl IntoView {
    let details = RwSignal::new(None::<Recipe>);
    let loading = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let alive = std::rc::Rc::new(std::cell::Cell::new(true));
    #[cfg(feature = "csr")]
    {
        let alive = std::rc::Rc::clone(&alive);
        on_cleanup(move || alive.set(false));
    }

    Effect::new(move || {
        let Some(id) = selected.get() else {
            details.set(None);
            return;
        };
        details.set(None);
        loading.set(true);
        #[cfg(feature = "csr")]
        {
            let alive = std::rc::Rc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = crate::net::recipes::get_by_id(id).await;
                if !alive.get() {
                    return;
                }
                match result {
                    Ok(recipe) => details.set(Some(recipe)),
                    Err(err) => {
                        log::error!("failed to load recipe {id}: {err}");
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    view! {
        {move || {
            selected
                .get()
                .map(|_| {
                    view! {
                        <div class="modal-overlay" on:click=move |_| selected.set(None)>
                            <div
                                class="modal"
                                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                            >
                                <button
                                    class="modal__close"
                                    on:click=move |_| selected.set(None)
                                >
                                    "×"
                                </button>
                                {move || {
                                    loading
                                        .get()
                                        .then(|| {
                                            view! {
                                                <p class="modal__status">"Loading recipe details..."</p>
                                            }
                                        })
                                }}
                                {move || {
                                    details
                                        .get()
                                        .map(|recipe| {
                                            view! {
                                                <div class="modal__content">
                                                    <div class="modal__header">
                                                        <h2 class="modal__title">{recipe.name.clone()}</h2>
                                                        <span class="modal__category">
                                                            {recipe.category.clone()}
                                                        </span>
                                                    </div>
                                                    <p class="modal__description">
                                                        {recipe.description.clone()}
                                                    </p>
                                                    <IngredientsList ingredients=recipe.ingredients.clone()/>
                                                </div>
                                            }
                                        })
                                }}
                                {move || {
                                    (!loading.get() && details.with(Option::is_none))
                                        .then(|| {
                                            view! {
                                                <p class="modal__status">
                                                    "Failed to load recipe details."
                                                </p>
                                            }
                                        })
                                }}
                            </div>
                        </div>
                    }
                })
        }}
    }
}
