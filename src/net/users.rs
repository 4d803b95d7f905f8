//! Typed user-administration endpoints over the generic gateway.
//!
//! All of these require the admin role server-side; the client only gates
//! navigation, the server enforces authorization on every call.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::api::{self, ApiError, Method};
use super::types::UserDto;

pub(crate) const USERS_ENDPOINT: &str = "auth/users";
pub(crate) const USER_ROLE_ENDPOINT: &str = "auth/user/role";
pub(crate) const USER_ENDPOINT: &str = "auth/user";

/// Fetch every registered user with their roles.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn get_all() -> Result<Vec<UserDto>, ApiError> {
    let value = api::call(Method::Get, USERS_ENDPOINT, &[], &[], None, true).await?;
    api::from_value(value)
}

/// Grant `role` to `username`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn add_role(username: &str, role: &str) -> Result<(), ApiError> {
    let body = role_body(username, role);
    api::call(Method::Post, USER_ROLE_ENDPOINT, &[], &[], Some(&body), true).await?;
    Ok(())
}

/// Revoke `role` from `username`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn remove_role(username: &str, role: &str) -> Result<(), ApiError> {
    let body = role_body(username, role);
    api::call(Method::Delete, USER_ROLE_ENDPOINT, &[], &[], Some(&body), true).await?;
    Ok(())
}

/// Delete `username`'s account.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn delete(username: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({"username": username});
    api::call(Method::Delete, USER_ENDPOINT, &[], &[], Some(&body), true).await?;
    Ok(())
}

pub(crate) fn role_body(username: &str, role: &str) -> serde_json::Value {
    serde_json::json!({"username": username, "role": role})
}
