//! Bearer-token claims decoding.
//!
//! DESIGN
//! ======
//! The token is an opaque signed string issued by the API server; the client
//! never verifies the signature (that is the server's job on every privileged
//! call). Decoding only exists so the UI can render an identity and gate
//! navigation. Any malformed input collapses to the empty identity instead of
//! an error: the UI must always have a renderable identity state.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Identity and authorization data decoded from a token payload.
///
/// Recomputed from the stored token on demand, never persisted on its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    /// Username claim, or `""` when absent.
    pub username: String,
    /// Role claim normalized to a list, or empty when absent.
    pub roles: Vec<String>,
}

/// Role name granting access to the admin panel.
pub const ADMIN_ROLE: &str = "admin";

/// Decode the payload segment of a token into [`Claims`].
///
/// The token is expected to be three dot-separated segments where the middle
/// segment is base64url-encoded JSON carrying `username` and `roles`. The
/// role claim may be a JSON array of strings or a single comma-joined string;
/// both normalize to `Vec<String>` here so the ambiguity never propagates
/// past this boundary.
///
/// Total function: every malformed input (empty string, missing segment,
/// invalid base64, non-JSON payload, unexpected claim shapes) yields the
/// empty identity.
pub fn decode(token: &str) -> Claims {
    let Some(segment) = token.split('.').nth(1) else {
        return Claims::default();
    };
    // Some issuers pad the segment even though RFC 7515 says not to.
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(segment.trim_end_matches('=')) else {
        return Claims::default();
    };
    let Ok(payload) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
        return Claims::default();
    };

    let username = payload
        .get("username")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_owned();

    let roles = match payload.get("roles") {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(serde_json::Value::as_str)
            .map(str::to_owned)
            .collect(),
        Some(serde_json::Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    };

    Claims { username, roles }
}

/// Whether `claims` grant `role`, taking login state into account.
///
/// Short-circuits on `logged_in == false`: an unauthenticated caller never
/// has any role, regardless of whatever stale claims were decoded.
pub fn has_role(claims: &Claims, role: &str, logged_in: bool) -> bool {
    logged_in && claims.roles.iter().any(|held| held == role)
}
