//! Durable session record in `localStorage`.
//!
//! A single key holds the serialized [`User`] record: written on successful
//! login, erased on logout, read once at startup. Requires a browser
//! environment; the SSR build sees no storage and hydrates an empty session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "user";

/// Decode a raw stored record. A record that fails to parse is treated as
/// absent; callers purge it.
pub fn parse_record(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Read the raw stored record, if any.
pub fn load_raw() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the record.
pub fn save(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(raw) = serde_json::to_string(user) {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the record. Safe to call when none exists.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
