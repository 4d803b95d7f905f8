//! Admin user management panel.
//!
//! DESIGN
//! ======
//! Mutations are read-after-write: each handler awaits the call, then
//! reloads the whole user list rather than patching local state. Self-action
//! guards run before any request so an admin cannot demote or delete their
//! own account from here; the server enforces the same rule on its side.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::components::admin_user_row::AdminUserRow;
use crate::net::types::UserDto;
use crate::security::session::use_auth;
use crate::state::admin::{
    check_delete, check_role_change, check_role_selection, delete_confirm_prompt,
    role_added_message, role_removed_message, user_deleted_message,
};
use crate::state::notify::use_notifier;

#[cfg(feature = "csr")]
fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_auth();
    let notifier = use_notifier();

    let users = RwSignal::new(Vec::<UserDto>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let expanded = RwSignal::new(HashSet::<String>::new());
    let pending_roles = RwSignal::new(HashMap::<String, String>::new());

    #[cfg(feature = "csr")]
    let alive = std::rc::Rc::new(std::cell::Cell::new(true));
    #[cfg(feature = "csr")]
    {
        let alive = std::rc::Rc::clone(&alive);
        on_cleanup(move || alive.set(false));
    }

    #[cfg(feature = "csr")]
    let reload = {
        let alive = std::rc::Rc::clone(&alive);
        move || {
            let alive = std::rc::Rc::clone(&alive);
            loading.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::net::users::get_all().await;
                if !alive.get() {
                    return;
                }
                match result {
                    Ok(list) => users.set(list),
                    Err(err) => {
                        log::error!("failed to load users: {err}");
                        error.set(Some(err.user_message("Failed to load users")));
                    }
                }
                loading.set(false);
            });
        }
    };

    #[cfg(feature = "csr")]
    {
        let reload = reload.clone();
        Effect::new(move || reload());
    }
    #[cfg(not(feature = "csr"))]
    Effect::new(move || loading.set(false));

    let fail = move |message: String| {
        notifier.error(message.clone());
        success.set(None);
        error.set(Some(message));
    };

    let on_add_role = {
        #[cfg(feature = "csr")]
        let reload = reload.clone();
        Callback::new(move |(target, role): (String, String)| {
            if let Err(message) = check_role_change(&target, &session.username()) {
                fail(message.to_owned());
                return;
            }
            let role = match check_role_selection(&role) {
                Ok(role) => role.to_owned(),
                Err(message) => {
                    fail(message.to_owned());
                    return;
                }
            };
            #[cfg(feature = "csr")]
            {
                let reload = reload.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::users::add_role(&target, &role).await {
                        Ok(()) => {
                            let message = role_added_message(&role, &target);
                            notifier.success(message.clone());
                            error.set(None);
                            success.set(Some(message));
                            pending_roles.update(|pending| {
                                pending.remove(&target);
                            });
                            reload();
                        }
                        Err(err) => fail(err.user_message("Failed to add role")),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (target, role);
        })
    };

    let on_remove_role = {
        #[cfg(feature = "csr")]
        let reload = reload.clone();
        Callback::new(move |(target, role): (String, String)| {
            if let Err(message) = check_role_change(&target, &session.username()) {
                fail(message.to_owned());
                return;
            }
            #[cfg(feature = "csr")]
            {
                let reload = reload.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::users::remove_role(&target, &role).await {
                        Ok(()) => {
                            let message = role_removed_message(&role, &target);
                            notifier.success(message.clone());
                            error.set(None);
                            success.set(Some(message));
                            reload();
                        }
                        Err(err) => fail(err.user_message("Failed to remove role")),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (target, role);
        })
    };

    let on_delete = {
        #[cfg(feature = "csr")]
        let reload = reload.clone();
        Callback::new(move |target: String| {
            if let Err(message) = check_delete(&target, &session.username()) {
                fail(message.to_owned());
                return;
            }
            #[cfg(feature = "csr")]
            {
                if !confirm(&delete_confirm_prompt(&target)) {
                    return;
                }
                let reload = reload.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::users::delete(&target).await {
                        Ok(()) => {
                            let message = user_deleted_message(&target);
                            notifier.success(message.clone());
                            error.set(None);
                            success.set(Some(message));
                            reload();
                        }
                        Err(err) => fail(err.user_message("Failed to delete user")),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = target;
        })
    };

    view! {
        <section class="admin">
            <h1 class="admin__title">"User management"</h1>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="admin__banner admin__banner--error">
                                <span>{message}</span>
                                <button on:click=move |_| error.set(None)>"×"</button>
                            </div>
                        }
                    })
            }}
            {move || {
                success
                    .get()
                    .map(|message| {
                        view! {
                            <div class="admin__banner admin__banner--success">
                                <span>{message}</span>
                                <button on:click=move |_| success.set(None)>"×"</button>
                            </div>
                        }
                    })
            }}
            {move || {
                loading
                    .get()
                    .then(|| view! { <p class="admin__status">"Loading users..."</p> })
            }}
            <div class="admin__users">
                <For
                    each=move || users.get()
                    key=|user| user.username.clone()
                    let:user
                >
                    <AdminUserRow
                        user=user.clone()
                        current_username=session.username()
                        expanded=expanded
                        pending_roles=pending_roles
                        on_add_role=on_add_role
                        on_remove_role=on_remove_role
                        on_delete=on_delete
                    />
                </For>
            </div>
        </section>
    }
}
