//! Process-wide auth session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthSession`] is provided at app start and read by the header, route
//! guards and identity-aware pages. It is the only writer of login state;
//! pages never touch the token store directly. State transitions across the
//! decode+store+set sequence are not atomic, so callers serialize login
//! attempts by disabling submit while a call is in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::claims::{self, Claims};
use super::store;
use crate::net::api::{self, ApiError};

/// Reactive session state: current identity plus the logged-in flag.
///
/// Cheap to copy; both fields are signals backed by the reactive graph.
#[derive(Clone, Copy)]
pub struct AuthSession {
    claims: RwSignal<Claims>,
    logged_in: RwSignal<bool>,
}

/// Provide the session context for the component tree. Call once from `App`.
pub fn provide_auth_session() {
    provide_context(AuthSession::restore());
}

/// The session context provided by [`provide_auth_session`].
pub fn use_auth() -> AuthSession {
    expect_context::<AuthSession>()
}

impl AuthSession {
    /// Build a session from whatever token the store currently holds.
    /// Total: an absent or corrupt token yields a logged-out session.
    pub fn restore() -> Self {
        let (claims, logged_in) = restored_identity();
        Self {
            claims: RwSignal::new(claims),
            logged_in: RwSignal::new(logged_in),
        }
    }

    pub fn claims(&self) -> Claims {
        self.claims.get()
    }

    pub fn username(&self) -> String {
        self.claims.with(|claims| claims.username.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    /// Whether the current session holds `role`; always false when logged out.
    pub fn has_role(&self, role: &str) -> bool {
        self.claims
            .with(|claims| claims::has_role(claims, role, self.logged_in.get()))
    }

    /// Log in and re-derive identity from the freshly stored token.
    ///
    /// # Errors
    ///
    /// On failure the session state is left unchanged and the [`ApiError`]
    /// is handed back for the caller's UI to present.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        api::login(username, password).await?;
        self.refresh_from_store();
        Ok(())
    }

    /// Register a new account; the server logs the user in on success.
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthSession::login`].
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        api::register(username, password).await?;
        self.refresh_from_store();
        Ok(())
    }

    /// Clear the stored token and reset to the empty identity. Infallible,
    /// no network involved.
    pub fn logout(&self) {
        store::clear_token();
        self.claims.set(Claims::default());
        self.logged_in.set(false);
    }

    fn refresh_from_store(&self) {
        let (claims, logged_in) = restored_identity();
        self.claims.set(claims);
        self.logged_in.set(logged_in);
    }
}

/// Identity derived from the store's current token: logged in whenever a
/// token exists, with whatever claims decode out of it.
pub(crate) fn restored_identity() -> (Claims, bool) {
    match store::get_token() {
        Some(token) => (claims::decode(&token), true),
        None => (Claims::default(), false),
    }
}
