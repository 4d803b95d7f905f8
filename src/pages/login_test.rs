use super::*;

#[test]
fn blank_username_is_rejected() {
    assert_eq!(
        validate_credentials("", "secret"),
        Err("Please enter a username")
    );
    assert_eq!(
        validate_credentials("   ", "secret"),
        Err("Please enter a username")
    );
}

#[test]
fn blank_password_is_rejected() {
    assert_eq!(
        validate_credentials("alice", ""),
        Err("Please enter a password")
    );
    assert_eq!(
        validate_credentials("alice", "  "),
        Err("Please enter a password")
    );
}

#[test]
fn present_credentials_pass() {
    assert_eq!(validate_credentials("alice", "secret"), Ok(()));
}

#[test]
fn admins_land_on_the_admin_panel() {
    assert_eq!(post_auth_target(true, None), "/admin");
    assert_eq!(post_auth_target(true, Some("/recipes")), "/admin");
}

#[test]
fn non_admins_return_to_the_attempted_page() {
    assert_eq!(post_auth_target(false, Some("/recipes")), "/recipes");
}

#[test]
fn non_admins_without_origin_go_home() {
    assert_eq!(post_auth_target(false, None), "/");
    assert_eq!(post_auth_target(false, Some("")), "/");
}

#[test]
fn greeting_differs_between_modes() {
    assert_eq!(success_message(false, "alice"), "Welcome back, alice!");
    assert_eq!(success_message(true, "alice"), "Welcome, alice!");
}
