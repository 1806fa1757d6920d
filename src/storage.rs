//! Browser Credentials
//!
//! `window.localStorage` behind the session store's credential interface.

use leptos::prelude::window;
use taskboard_client::CredentialStore;
use web_sys::Storage;

pub struct BrowserCredentials {
    storage: Storage,
}

impl BrowserCredentials {
    /// `None` when the browser denies storage (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        window().local_storage().ok().flatten().map(|storage| Self { storage })
    }
}

impl CredentialStore for BrowserCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::error!("[Storage] Failed to persist {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if self.storage.remove_item(key).is_err() {
            log::error!("[Storage] Failed to remove {}", key);
        }
    }
}
