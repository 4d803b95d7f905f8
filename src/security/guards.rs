//! Navigation-time route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards decide synchronously against already-loaded session state: a route
//! either renders its children or redirects, with no intermediate loading
//! state. The decision logic is pure so it can be tested without a router.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::claims::ADMIN_ROLE;
use super::session::use_auth;

/// Terminal outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the wrapped view.
    Render,
    /// Send the visitor to the login page.
    RedirectLogin,
    /// Send an authenticated but unauthorized visitor home; logging in again
    /// would not grant the missing role.
    RedirectHome,
}

/// Guard for routes that merely require a login.
pub fn check_auth(logged_in: bool) -> GuardOutcome {
    if logged_in {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectLogin
    }
}

/// Guard for admin-only routes: superset of [`check_auth`] plus a role gate.
pub fn check_admin(logged_in: bool, roles: &[String]) -> GuardOutcome {
    match check_auth(logged_in) {
        GuardOutcome::Render if roles.iter().any(|role| role == ADMIN_ROLE) => GuardOutcome::Render,
        GuardOutcome::Render => GuardOutcome::RedirectHome,
        outcome => outcome,
    }
}

/// Login path carrying the attempted location so the login page can return
/// the visitor after a successful sign-in.
pub fn login_redirect_target(attempted_path: &str) -> String {
    if attempted_path.is_empty() || attempted_path == "/" {
        return "/login".to_owned();
    }
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("from", attempted_path);
    format!("/login?{}", query.finish())
}

/// Renders its children only for logged-in visitors; everyone else is
/// redirected to the login page with the attempted location preserved.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_auth();
    let location = use_location();
    move || match check_auth(session.is_logged_in()) {
        GuardOutcome::Render => children().into_any(),
        _ => {
            let target = login_redirect_target(&location.pathname.get());
            view! { <Redirect path=target/> }.into_any()
        }
    }
}

/// Renders its children only for logged-in admins. Unauthenticated visitors
/// go to login; authenticated non-admins go home.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_auth();
    let location = use_location();
    move || {
        let claims = session.claims();
        match check_admin(session.is_logged_in(), &claims.roles) {
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::RedirectHome => view! { <Redirect path="/"/> }.into_any(),
            GuardOutcome::RedirectLogin => {
                let target = login_redirect_target(&location.pathname.get());
                view! { <Redirect path=target/> }.into_any()
            }
        }
    }
}
