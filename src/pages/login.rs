//! Login and registration page.
//!
//! One form serves both modes. Submit is disabled while a call is in
//! flight, which is what serializes concurrent login attempts.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::security::claims::ADMIN_ROLE;
use crate::security::session::use_auth;
use crate::state::notify::use_notifier;

/// Reject blank credentials before any network call.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Please enter a username");
    }
    if password.trim().is_empty() {
        return Err("Please enter a password");
    }
    Ok(())
}

/// Where to go after a successful sign-in: admins land on their panel,
/// everyone else returns to the page that sent them to login, or home.
pub(crate) fn post_auth_target(is_admin: bool, from: Option<&str>) -> String {
    if is_admin {
        return "/admin".to_owned();
    }
    match from {
        Some(path) if !path.is_empty() => path.to_owned(),
        _ => "/".to_owned(),
    }
}

pub(crate) fn success_message(registering: bool, username: &str) -> String {
    if registering {
        format!("Welcome, {username}!")
    } else {
        format!("Welcome back, {username}!")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_auth();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let query = use_query_map();

    let registering = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if let Err(message) = validate_credentials(&user, &pass) {
            error.set(Some(message.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        let is_register = registering.get_untracked();
        let from = query.with_untracked(|query| query.get("from"));
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = if is_register {
                session.register(&user, &pass).await
            } else {
                session.login(&user, &pass).await
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    notifier.success(success_message(is_register, &session.username()));
                    let target =
                        post_auth_target(session.has_role(ADMIN_ROLE), from.as_deref());
                    navigate(&target, NavigateOptions::default());
                }
                Err(err) => {
                    let context = if is_register { "Registration failed" } else { "Login failed" };
                    let message = err.user_message(context);
                    log::warn!("{context}: {err}");
                    notifier.error(message.clone());
                    error.set(Some(message));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (is_register, from, navigate);
            busy.set(false);
        }
    };

    view! {
        <section class="login">
            <h1 class="login__title">
                {move || if registering.get() { "Create an account" } else { "Login" }}
            </h1>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="login__error">{message}</p> })
            }}
            <form class="login__form" on:submit=submit>
                <label class="login__label">
                    "Username"
                    <input
                        type="text"
                        class="login__input"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login__label">
                    "Password"
                    <input
                        type="password"
                        class="login__input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="login__submit" prop:disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            "Please wait..."
                        } else if registering.get() {
                            "Register"
                        } else {
                            "Login"
                        }
                    }}
                </button>
            </form>
            <button
                type="button"
                class="login__mode"
                on:click=move |_| {
                    registering.update(|mode| *mode = !*mode);
                    error.set(None);
                }
            >
                {move || {
                    if registering.get() {
                        "Already have an account? Login"
                    } else {
                        "Need an account? Register"
                    }
                }}
            </button>
        </section>
    }
}
