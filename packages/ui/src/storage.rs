//! Shared session-storage constructor for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Elsewhere**: a process-wide [`store::MemoryStorage`], so the session
//!   lives as long as the app does

/// Create the platform-appropriate session store.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_storage() -> impl store::KeyValueStore {
    store::LocalStorage::new()
}

/// Create the platform-appropriate session store.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_storage() -> impl store::KeyValueStore {
    use std::sync::OnceLock;

    static SESSION: OnceLock<store::MemoryStorage> = OnceLock::new();
    SESSION.get_or_init(store::MemoryStorage::new).clone()
}
