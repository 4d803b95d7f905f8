//! Toast notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push toasts through the [`Notifier`] context; the `ToastStack`
//! component renders the queue. Queue operations are pure; only the
//! auto-dismiss timer touches the browser.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// How long a toast stays up before auto-dismissing.
#[cfg(feature = "csr")]
const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(3);

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS class suffix for the stack renderer.
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast--info",
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The toast queue; ids increase monotonically per queue.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotifyState {
    /// Append a toast and return its assigned id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the toast with `id`; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Context handle for pushing toasts from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<NotifyState>);

/// Provide the notifier context. Call once from `App`.
pub fn provide_notifier() {
    provide_context(Notifier(RwSignal::new(NotifyState::default())));
}

/// The notifier provided by [`provide_notifier`].
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

impl Notifier {
    pub fn state(&self) -> RwSignal<NotifyState> {
        self.0
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|state| state.dismiss(id));
    }

    fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let mut id = 0;
        self.0.update(|state| id = state.push(kind, message));

        #[cfg(feature = "csr")]
        {
            let queue = self.0;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_DURATION).await;
                queue.update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
