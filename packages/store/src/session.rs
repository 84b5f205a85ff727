//! # Session persistence: auth state in browser storage
//!
//! The signed-in session survives page reloads by writing the three pieces of
//! [`AuthState`] to a key/value store under fixed keys (see
//! [`crate::config::STORAGE_PROFILE_KEY`] and friends).
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string store with `get`/`set`/`remove`. Implementations:
//!
//! | Type | Backing | Used by |
//! |------|---------|---------|
//! | [`crate::MemoryStorage`] | `HashMap` behind `Arc<Mutex<_>>` | tests and native builds |
//! | `LocalStorage` | `window.localStorage` | the web build (`web` feature) |
//!
//! ## Restoring
//!
//! [`restore_auth`] is lenient: a missing token, an unreadable profile or an
//! expired token all restore as logged out, and the stale keys are cleared.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::auth::AuthState;
use crate::config::{STORAGE_EXPIRE_KEY, STORAGE_JWT_KEY, STORAGE_PROFILE_KEY};
use crate::models::Profile;

/// Synchronous string key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("could not write `{0}` to storage")]
    Write(String),
    #[error("could not encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Write the auth state to storage, removing keys for absent fields.
pub fn persist_auth(store: &impl KeyValueStore, state: &AuthState) -> Result<(), StorageError> {
    match &state.profile {
        Some(profile) => store.set(STORAGE_PROFILE_KEY, &serde_json::to_string(profile)?)?,
        None => store.remove(STORAGE_PROFILE_KEY),
    }
    match &state.token {
        Some(token) => store.set(STORAGE_JWT_KEY, token)?,
        None => store.remove(STORAGE_JWT_KEY),
    }
    match &state.expire {
        Some(expire) => store.set(STORAGE_EXPIRE_KEY, expire)?,
        None => store.remove(STORAGE_EXPIRE_KEY),
    }
    Ok(())
}

/// Remove every persisted session key.
pub fn clear_auth(store: &impl KeyValueStore) {
    store.remove(STORAGE_PROFILE_KEY);
    store.remove(STORAGE_JWT_KEY);
    store.remove(STORAGE_EXPIRE_KEY);
}

/// Read the persisted session as of `now`.
pub fn restore_auth(store: &impl KeyValueStore, now: DateTime<Utc>) -> AuthState {
    let Some(token) = store.get(STORAGE_JWT_KEY) else {
        return AuthState::default();
    };
    let profile = store
        .get(STORAGE_PROFILE_KEY)
        .and_then(|raw| serde_json::from_str::<Profile>(&raw).ok());
    let Some(profile) = profile else {
        clear_auth(store);
        return AuthState::default();
    };

    let state = AuthState {
        profile: Some(profile),
        token: Some(token),
        expire: store.get(STORAGE_EXPIRE_KEY),
    };
    if state.is_expired(now) {
        clear_auth(store);
        return AuthState::default();
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sample_login;
    use crate::models::RoleCode;
    use crate::MemoryStorage;

    fn now() -> DateTime<Utc> {
        "2026-05-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn persisted_session_restores() {
        let store = MemoryStorage::new();
        let state = AuthState::signed_in(sample_login(RoleCode::GardenManager));

        persist_auth(&store, &state).unwrap();

        assert_eq!(store.get(STORAGE_JWT_KEY).as_deref(), Some("jwt-token"));
        assert_eq!(restore_auth(&store, now()), state);
    }

    #[test]
    fn empty_storage_restores_logged_out() {
        let store = MemoryStorage::new();
        assert_eq!(restore_auth(&store, now()), AuthState::default());
    }

    #[test]
    fn expired_session_is_cleared() {
        let store = MemoryStorage::new();
        let mut login = sample_login(RoleCode::Visitor);
        login.expire = "2026-04-30T00:00:00Z".to_string();
        persist_auth(&store, &AuthState::signed_in(login)).unwrap();

        assert_eq!(restore_auth(&store, now()), AuthState::default());
        assert!(store.get(STORAGE_PROFILE_KEY).is_none());
        assert!(store.get(STORAGE_JWT_KEY).is_none());
    }

    #[test]
    fn corrupt_profile_is_cleared() {
        let store = MemoryStorage::new();
        store.set(STORAGE_JWT_KEY, "jwt-token").unwrap();
        store.set(STORAGE_PROFILE_KEY, "{not json").unwrap();

        assert_eq!(restore_auth(&store, now()), AuthState::default());
        assert!(store.get(STORAGE_JWT_KEY).is_none());
    }

    #[test]
    fn logging_out_removes_keys() {
        let store = MemoryStorage::new();
        persist_auth(&store, &AuthState::signed_in(sample_login(RoleCode::Admin))).unwrap();

        persist_auth(&store, &AuthState::default()).unwrap();

        assert!(store.get(STORAGE_PROFILE_KEY).is_none());
        assert!(store.get(STORAGE_JWT_KEY).is_none());
        assert!(store.get(STORAGE_EXPIRE_KEY).is_none());
    }
}
