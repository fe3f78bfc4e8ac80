//! Tab-scoped persistence. Backed by `sessionStorage` on the web; a no-op on
//! desktop, where state lives for the process anyway.

use serde::{de::DeserializeOwned, Serialize};
#[cfg(target_arch = "wasm32")]
use tracing::warn;

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.session_storage().ok()??;
        let raw = storage.get_item(key).ok()??;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable session value");
                storage.remove_item(key).ok();
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten())
        else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                if storage.set_item(key, &raw).is_err() {
                    warn!(key, "sessionStorage write rejected");
                }
            }
            Err(err) => warn!(key, error = %err, "unable to serialise session value"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}
