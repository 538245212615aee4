//! JSON values in LocalStorage
//!
//! Every failure (no window, storage disabled, corrupt JSON) degrades to
//! "nothing stored" with a warning. Native builds never persist.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load and decode the value stored under `key`
#[cfg(target_arch = "wasm32")]
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring corrupt '{}' in LocalStorage: {}", key, e);
            None
        }
    }
}

/// Encode and store `value` under `key`. Returns whether it was written.
#[cfg(target_arch = "wasm32")]
pub fn save_json<T: Serialize>(key: &str, value: &T) -> bool {
    let Some(storage) = local_storage() else {
        log::warn!("LocalStorage unavailable, '{}' not saved", key);
        return false;
    };
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to encode '{}': {}", key, e);
            return false;
        }
    };
    storage.set_item(key, &json).is_ok()
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load_json<T: DeserializeOwned>(_key: &str) -> Option<T> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_json<T: Serialize>(_key: &str, _value: &T) -> bool {
    false
}
