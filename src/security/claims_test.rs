use super::*;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let encoded = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("header.{encoded}.signature")
}

#[test]
fn decode_extracts_username_and_array_roles() {
    let token = token_with_payload(&serde_json::json!({
        "username": "alice",
        "roles": ["user", "admin"],
    }));
    let claims = decode(&token);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.roles, vec!["user".to_owned(), "admin".to_owned()]);
}

#[test]
fn decode_splits_comma_joined_roles() {
    let token = token_with_payload(&serde_json::json!({
        "username": "bob",
        "roles": "user,admin",
    }));
    assert_eq!(decode(&token).roles, vec!["user".to_owned(), "admin".to_owned()]);
}

#[test]
fn decode_trims_and_drops_empty_entries_in_joined_roles() {
    let token = token_with_payload(&serde_json::json!({
        "username": "bob",
        "roles": " user , ,admin,",
    }));
    assert_eq!(decode(&token).roles, vec!["user".to_owned(), "admin".to_owned()]);
}

#[test]
fn decode_comma_and_array_forms_agree() {
    let array = token_with_payload(&serde_json::json!({"username": "u", "roles": ["a", "b"]}));
    let joined = token_with_payload(&serde_json::json!({"username": "u", "roles": "a,b"}));
    assert_eq!(decode(&array), decode(&joined));
}

#[test]
fn decode_empty_string_yields_empty_identity() {
    assert_eq!(decode(""), Claims::default());
}

#[test]
fn decode_missing_payload_segment_yields_empty_identity() {
    assert_eq!(decode("only-one-segment"), Claims::default());
}

#[test]
fn decode_invalid_base64_yields_empty_identity() {
    assert_eq!(decode("a.!!!not-base64!!!.c"), Claims::default());
}

#[test]
fn decode_non_json_payload_yields_empty_identity() {
    let garbage = URL_SAFE_NO_PAD.encode("not json at all");
    assert_eq!(decode(&format!("a.{garbage}.c")), Claims::default());
}

#[test]
fn decode_tolerates_missing_claims() {
    let token = token_with_payload(&serde_json::json!({"sub": "something-else"}));
    assert_eq!(decode(&token), Claims::default());
}

#[test]
fn decode_accepts_padded_payload_segment() {
    let payload = serde_json::json!({"username": "eve", "roles": ["user"]}).to_string();
    let padded = base64::engine::general_purpose::URL_SAFE.encode(payload);
    let claims = decode(&format!("h.{padded}.s"));
    assert_eq!(claims.username, "eve");
}

#[test]
fn has_role_requires_login() {
    let claims = Claims {
        username: "alice".to_owned(),
        roles: vec![ADMIN_ROLE.to_owned()],
    };
    assert!(has_role(&claims, ADMIN_ROLE, true));
    assert!(!has_role(&claims, ADMIN_ROLE, false));
}

#[test]
fn has_role_rejects_missing_role() {
    let claims = Claims {
        username: "carol".to_owned(),
        roles: vec!["user".to_owned()],
    };
    assert!(!has_role(&claims, ADMIN_ROLE, true));
}
