//! Pure helpers and self-action guards for the admin user panel.
//!
//! DESIGN
//! ======
//! The self-action guards run before any network call so an admin cannot
//! demote or delete their own account from the UI. They are a UX safeguard
//! only; the server enforces the same rule authoritatively.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Roles the panel can assign.
pub const AVAILABLE_ROLES: [&str; 2] = ["user", "admin"];

/// Validation message for role changes targeting the caller's own account.
pub const OWN_ROLES_MESSAGE: &str = "You cannot modify roles for your own account";

/// Validation message for deleting the caller's own account.
pub const OWN_DELETE_MESSAGE: &str = "You cannot delete your own account";

/// Roles that can still be added to a user holding `existing`.
pub fn roles_to_add(existing: &[String]) -> Vec<&'static str> {
    AVAILABLE_ROLES
        .into_iter()
        .filter(|candidate| !existing.iter().any(|held| held == candidate))
        .collect()
}

/// Compact role list for a collapsed user row.
pub fn roles_display(roles: &[String]) -> String {
    if roles.is_empty() {
        "No roles".to_owned()
    } else {
        roles.join(", ")
    }
}

/// Reject role mutations on the caller's own account.
pub fn check_role_change(target: &str, current_user: &str) -> Result<(), &'static str> {
    if target == current_user {
        Err(OWN_ROLES_MESSAGE)
    } else {
        Ok(())
    }
}

/// Reject deleting the caller's own account.
pub fn check_delete(target: &str, current_user: &str) -> Result<(), &'static str> {
    if target == current_user {
        Err(OWN_DELETE_MESSAGE)
    } else {
        Ok(())
    }
}

/// Require a non-empty role selection before submitting an add.
pub fn check_role_selection(role: &str) -> Result<&str, &'static str> {
    let role = role.trim();
    if role.is_empty() {
        Err("Please select a role to add")
    } else {
        Ok(role)
    }
}

pub fn role_added_message(role: &str, username: &str) -> String {
    format!("Role \"{role}\" added to user \"{username}\"")
}

pub fn role_removed_message(role: &str, username: &str) -> String {
    format!("Role \"{role}\" removed from user \"{username}\"")
}

pub fn user_deleted_message(username: &str) -> String {
    format!("User \"{username}\" deleted successfully")
}

pub fn delete_confirm_prompt(username: &str) -> String {
    format!("Are you sure you want to delete user \"{username}\"?")
}
