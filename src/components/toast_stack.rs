//! Renders the toast queue in a fixed corner stack.

use leptos::prelude::*;

use crate::state::notify::use_notifier;

/// Toast stack fed by the [`Notifier`](crate::state::notify::Notifier)
/// context. Keyed on toast id so dismissals remove the right node.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();
    let state = notifier.state();

    view! {
        <div class="toasts">
            <For
                each=move || state.with(|state| state.toasts().to_vec())
                key=|toast| toast.id
                let:toast
            >
                <div class=format!("toast {}", toast.kind.class())>
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__dismiss"
                        on:click=move |_| notifier.dismiss(toast.id)
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
