//! Fallback page for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Error404Page() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to home"</A>
        </section>
    }
}
