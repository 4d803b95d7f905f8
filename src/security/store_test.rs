use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_with_roles(roles: &[&str]) -> String {
    let payload = serde_json::json!({"username": "tester", "roles": roles});
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

fn memory_store() -> TokenStore<MemoryStore, MemoryStore> {
    TokenStore {
        persistent: MemoryStore::default(),
        ephemeral: MemoryStore::default(),
    }
}

#[test]
fn slot_policy_sends_admin_to_ephemeral() {
    let admin = Claims {
        username: "a".to_owned(),
        roles: vec!["user".to_owned(), "admin".to_owned()],
    };
    assert_eq!(slot_for(&admin), StorageSlot::Ephemeral);
}

#[test]
fn slot_policy_sends_everyone_else_to_persistent() {
    let user = Claims {
        username: "b".to_owned(),
        roles: vec!["user".to_owned()],
    };
    assert_eq!(slot_for(&user), StorageSlot::Persistent);
    assert_eq!(slot_for(&Claims::default()), StorageSlot::Persistent);
}

#[test]
fn set_then_get_round_trips_for_both_claim_sets() {
    let store = memory_store();

    let user_token = token_with_roles(&["user"]);
    store.set_token(&user_token);
    assert_eq!(store.get_token().as_deref(), Some(user_token.as_str()));

    let admin_token = token_with_roles(&["admin"]);
    store.set_token(&admin_token);
    assert_eq!(store.get_token().as_deref(), Some(admin_token.as_str()));
}

#[test]
fn admin_token_never_lands_in_persistent_slot() {
    let store = memory_store();
    store.set_token(&token_with_roles(&["admin"]));
    assert!(store.persistent.read(TOKEN_KEY).is_none());
    assert!(store.ephemeral.read(TOKEN_KEY).is_some());
}

#[test]
fn user_token_never_lands_in_ephemeral_slot() {
    let store = memory_store();
    store.set_token(&token_with_roles(&["user"]));
    assert!(store.ephemeral.read(TOKEN_KEY).is_none());
    assert!(store.persistent.read(TOKEN_KEY).is_some());
}

#[test]
fn switching_privilege_levels_evicts_the_old_copy() {
    let store = memory_store();
    store.set_token(&token_with_roles(&["user"]));
    store.set_token(&token_with_roles(&["admin"]));
    assert!(store.persistent.read(TOKEN_KEY).is_none());

    store.set_token(&token_with_roles(&["user"]));
    assert!(store.ephemeral.read(TOKEN_KEY).is_none());
}

#[test]
fn clear_token_empties_both_slots_and_is_idempotent() {
    let store = memory_store();
    store.set_token(&token_with_roles(&["admin"]));
    store.clear_token();
    assert!(store.get_token().is_none());

    store.set_token(&token_with_roles(&["user"]));
    store.clear_token();
    store.clear_token();
    assert!(store.get_token().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn is_authenticated_reflects_token_presence() {
    let store = memory_store();
    assert!(!store.is_authenticated());
    store.set_token(&token_with_roles(&["user"]));
    assert!(store.is_authenticated());
}

#[test]
fn module_level_store_round_trips() {
    clear_token();
    assert!(get_token().is_none());

    let token = token_with_roles(&["user"]);
    set_token(&token);
    assert_eq!(get_token().as_deref(), Some(token.as_str()));
    assert!(is_authenticated());

    clear_token();
    assert!(!is_authenticated());
}
