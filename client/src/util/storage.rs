//! Browser `localStorage` backend for the task stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `tasks::store::KeyValueStore` over `window.localStorage` so the
//! domain crate's load/save rules run unchanged in the browser. Outside the
//! hydrate build (SSR, host tests) reads find nothing and writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use tasks::store::{KeyValueStore, StoreError};

/// Handle to the page's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StoreError::Backend("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|err| StoreError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
