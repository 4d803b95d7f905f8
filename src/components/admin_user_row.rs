//! One expandable row in the admin user table.
//!
//! DESIGN
//! ======
//! The row is presentation only: mutations are raised through callbacks and
//! performed by the admin page, which owns refresh and toasts. Controls that
//! would act on the caller's own account are not rendered at all, matching
//! the page-level guards.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::net::types::UserDto;
use crate::state::admin::{roles_display, roles_to_add};

/// Expandable user row with role badges and an add-role picker.
#[component]
pub fn AdminUserRow(
    user: UserDto,
    current_username: String,
    expanded: RwSignal<HashSet<String>>,
    pending_roles: RwSignal<HashMap<String, String>>,
    on_add_role: Callback<(String, String)>,
    on_remove_role: Callback<(String, String)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let username = user.username.clone();
    let is_self = username == current_username;
    let addable = roles_to_add(&user.roles);

    let row_key = username.clone();
    let is_expanded = move || expanded.with(|set| set.contains(&row_key));
    let toggle_key = username.clone();
    let toggle = move |_| {
        expanded.update(|set| {
            if !set.remove(&toggle_key) {
                set.insert(toggle_key.clone());
            }
        });
    };

    let selection_key = username.clone();
    let selected_role = move || {
        pending_roles.with(|pending| pending.get(&selection_key).cloned().unwrap_or_default())
    };

    view! {
        <div class="user-row">
            <div class="user-row__summary" on:click=toggle>
                <span class="user-row__name">{username.clone()}</span>
                <span class="user-row__roles">{roles_display(&user.roles)}</span>
                <span class="user-row__chevron">
                    {
                        let is_expanded = is_expanded.clone();
                        move || if is_expanded() { "▲" } else { "▼" }
                    }
                </span>
            </div>
            {move || {
                is_expanded()
                    .then(|| {
                        let username = username.clone();
                        let addable = addable.clone();
                        let roles = user.roles.clone();
                        view! {
                            <div class="user-row__detail">
                                <div class="user-row__badges">
                                    {roles
                                        .iter()
                                        .map(|role| {
                                            let role = role.clone();
                                            let badge_user = username.clone();
                                            let badge_role = role.clone();
                                            view! {
                                                <span class="user-row__badge">
                                                    {role.clone()}
                                                    {(!is_self)
                                                        .then(|| {
                                                            view! {
                                                                <button
                                                                    type="button"
                                                                    class="user-row__badge-remove"
                                                                    on:click=move |_| {
                                                                        on_remove_role
                                                                            .run((badge_user.clone(), badge_role.clone()));
                                                                    }
                                                                >
                                                                    "×"
                                                                </button>
                                                            }
                                                        })}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                {if is_self {
                                    view! {
                                        <p class="user-row__hint">
                                            "You cannot modify roles for your own account"
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    let select_user = username.clone();
                                    let submit_user = username.clone();
                                    let delete_user = username.clone();
                                    let selected = selected_role.clone();
                                    view! {
                                        <div class="user-row__actions">
                                            <select
                                                class="user-row__select"
                                                prop:value=selected_role.clone()
                                                on:change=move |ev| {
                                                    let role = event_target_value(&ev);
                                                    pending_roles
                                                        .update(|pending| {
                                                            pending.insert(select_user.clone(), role);
                                                        });
                                                }
                                            >
                                                <option value="">"Select a role"</option>
                                                {addable
                                                    .iter()
                                                    .map(|role| {
                                                        let role = (*role).to_owned();
                                                        view! {
                                                            <option value=role.clone()>{role.clone()}</option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                            <button
                                                type="button"
                                                class="user-row__add"
                                                on:click=move |_| {
                                                    on_add_role.run((submit_user.clone(), selected()));
                                                }
                                            >
                                                "Add role"
                                            </button>
                                            <button
                                                type="button"
                                                class="user-row__delete"
                                                on:click=move |_| {
                                                    on_delete.run(delete_user.clone());
                                                }
                                            >
                                                "Delete user"
                                            </button>
                                        </div>
                                    }
                                        .into_any()
                                }}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
