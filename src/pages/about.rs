//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About us"</h1>
            <p>
                "Cook & Recipe is a small kitchen companion: a catalog of \
                 recipes with their ingredient lists and nutrition facts, \
                 curated by people who would rather cook than scroll."
            </p>
            <p>
                "Recipes are grouped by meal type so you can jump straight to \
                 breakfast ideas or tonight's dinner. Every ingredient line \
                 can be expanded to show what it contributes per 100g."
            </p>
        </section>
    }
}
