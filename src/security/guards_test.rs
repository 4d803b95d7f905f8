use super::*;

fn roles(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn check_auth_renders_when_logged_in() {
    assert_eq!(check_auth(true), GuardOutcome::Render);
}

#[test]
fn check_auth_redirects_to_login_when_logged_out() {
    assert_eq!(check_auth(false), GuardOutcome::RedirectLogin);
}

#[test]
fn check_admin_renders_for_admins() {
    assert_eq!(
        check_admin(true, &roles(&["user", "admin"])),
        GuardOutcome::Render
    );
}

#[test]
fn check_admin_sends_authenticated_non_admins_home() {
    assert_eq!(
        check_admin(true, &roles(&["user"])),
        GuardOutcome::RedirectHome
    );
}

#[test]
fn check_admin_sends_unauthenticated_visitors_to_login() {
    // Distinct target from the non-admin case: logging in could still help.
    assert_eq!(
        check_admin(false, &roles(&["admin"])),
        GuardOutcome::RedirectLogin
    );
}

#[test]
fn login_redirect_preserves_the_attempted_path() {
    assert_eq!(login_redirect_target("/admin"), "/login?from=%2Fadmin");
}

#[test]
fn login_redirect_from_root_is_bare() {
    assert_eq!(login_redirect_target("/"), "/login");
    assert_eq!(login_redirect_target(""), "/login");
}
