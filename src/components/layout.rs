//! Application shell: header navigation around the routed outlet.

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::security::claims::ADMIN_ROLE;
use crate::security::session::use_auth;

/// Header with primary navigation plus the session-aware corner: login link
/// when signed out, greeting/admin/logout when signed in.
#[component]
pub fn Layout() -> impl IntoView {
    let session = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="shell">
            <header class="shell__header">
                <nav class="shell__nav">
                    <A href="/">"Home"</A>
                    <A href="/recipes">"Recipes"</A>
                    <A href="/ingredients">"Ingredients"</A>
                    <A href="/about">"About us"</A>
                </nav>
                <div class="shell__session">
                    {move || {
                        if session.is_logged_in() {
                            view! {
                                <span class="shell__greeting">
                                    {format!("Hello, {}", session.username())}
                                </span>
                                {session
                                    .has_role(ADMIN_ROLE)
                                    .then(|| {
                                        view! { <A href="/admin">"Admin"</A> }
                                    })}
                                <button class="shell__logout" on:click=logout.clone()>
                                    "Logout"
                                </button>
                            }
                                .into_any()
                        } else {
                            view! { <A href="/login">"Login"</A> }.into_any()
                        }
                    }}
                </div>
            </header>
            <main class="shell__main">
                <Outlet/>
            </main>
        </div>
    }
}
