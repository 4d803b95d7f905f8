//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::security::session::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_auth();

    view! {
        <section class="home">
            <h1 class="home__title">"Cook & Recipe"</h1>
            <p class="home__lead">
                "Browse recipes, inspect their ingredients and check the \
                 nutrition facts behind every line."
            </p>
            {move || {
                session
                    .is_logged_in()
                    .then(|| {
                        view! {
                            <p class="home__greeting">
                                {format!("Welcome back, {}!", session.username())}
                            </p>
                        }
                    })
            }}
            <div class="home__actions">
                <A href="/recipes">"Browse recipes"</A>
                <A href="/ingredients">"Learn about ingredients"</A>
            </div>
        </section>
    }
}
