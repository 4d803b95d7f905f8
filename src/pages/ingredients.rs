//! Static ingredient information page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn IngredientsPage() -> impl IntoView {
    view! {
        <section class="ingredients-page">
            <h1>"Ingredients"</h1>
            <p>
                "Every recipe line names its ingredient, the amount used and \
                 an optional preparation note. Ingredients with known \
                 nutrition expose calories, protein, carbs and fat per 100g \
                 (or per 100ml for liquids)."
            </p>
            <p>
                "Open any recipe from the "
                <A href="/recipes">"recipes page"</A>
                " and expand an ingredient line to see its facts."
            </p>
        </section>
    }
}
