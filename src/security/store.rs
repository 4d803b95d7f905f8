//! Token persistence across the two browser key-value stores.
//!
//! DESIGN
//! ======
//! Exactly one of the two slots holds a live token at any time. The slot is
//! chosen at write time by a pure policy over the decoded claims: admin
//! sessions go to the session-scoped store so an elevated login does not
//! survive a browser restart on a shared machine; everything else goes to the
//! persistent store. Reads check the ephemeral slot first and fall back to
//! the persistent one; clearing removes from both so no orphaned copy is left
//! behind.
//!
//! The storage mechanism hides behind [`KeyValueStore`] so the policy and the
//! set/get/clear contract are testable without a browser. Native builds keep
//! tokens in a process-local map; browser builds use `localStorage` /
//! `sessionStorage`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::claims::{self, ADMIN_ROLE, Claims};

/// Storage key used for the token in both backends.
pub const TOKEN_KEY: &str = "jwtToken";

/// Minimal synchronous key-value storage surface.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Which backing store a token belongs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageSlot {
    /// Survives browser restarts (`localStorage`).
    Persistent,
    /// Dies with the tab session (`sessionStorage`).
    Ephemeral,
}

/// Pure slot policy: admin claims go to the ephemeral slot.
pub fn slot_for(claims: &Claims) -> StorageSlot {
    if claims.roles.iter().any(|role| role == ADMIN_ROLE) {
        StorageSlot::Ephemeral
    } else {
        StorageSlot::Persistent
    }
}

/// Token store pairing a persistent and an ephemeral backend.
pub struct TokenStore<P, E> {
    pub persistent: P,
    pub ephemeral: E,
}

impl<P: KeyValueStore, E: KeyValueStore> TokenStore<P, E> {
    /// Store `token` in the slot its claims select, removing any copy in the
    /// other slot.
    pub fn set_token(&self, token: &str) {
        match slot_for(&claims::decode(token)) {
            StorageSlot::Ephemeral => {
                self.ephemeral.write(TOKEN_KEY, token);
                self.persistent.remove(TOKEN_KEY);
            }
            StorageSlot::Persistent => {
                self.persistent.write(TOKEN_KEY, token);
                self.ephemeral.remove(TOKEN_KEY);
            }
        }
    }

    /// The live token, ephemeral slot first. No side effects.
    pub fn get_token(&self) -> Option<String> {
        self.ephemeral
            .read(TOKEN_KEY)
            .or_else(|| self.persistent.read(TOKEN_KEY))
    }

    /// Remove the token from both slots unconditionally. Idempotent.
    pub fn clear_token(&self) {
        self.ephemeral.remove(TOKEN_KEY);
        self.persistent.remove(TOKEN_KEY);
    }

    /// Whether a token is present. Says nothing about server-side validity.
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}

/// In-memory backend used by native builds and unit tests.
#[derive(Clone, Default)]
pub struct MemoryStore(std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>);

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

/// `localStorage`-backed persistent slot.
#[cfg(feature = "csr")]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

/// `sessionStorage`-backed ephemeral slot.
#[cfg(feature = "csr")]
pub struct SessionStorage;

#[cfg(feature = "csr")]
impl KeyValueStore for SessionStorage {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(feature = "csr"))]
thread_local! {
    static NATIVE_STORE: TokenStore<MemoryStore, MemoryStore> = TokenStore {
        persistent: MemoryStore::default(),
        ephemeral: MemoryStore::default(),
    };
}

/// Store a token in the environment's default store.
pub fn set_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        browser_store().set_token(token);
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| store.set_token(token));
    }
}

/// Read the token from the environment's default store.
pub fn get_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        browser_store().get_token()
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(TokenStore::get_token)
    }
}

/// Remove the token from both slots of the environment's default store.
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        browser_store().clear_token();
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(TokenStore::clear_token);
    }
}

/// Whether the environment's default store holds a token.
pub fn is_authenticated() -> bool {
    get_token().is_some()
}

#[cfg(feature = "csr")]
fn browser_store() -> TokenStore<LocalStorage, SessionStorage> {
    TokenStore {
        persistent: LocalStorage,
        ephemeral: SessionStorage,
    }
}
