//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use tasks::store::KeyValueStore;

use crate::util::storage::BrowserStorage;

const STORAGE_KEY: &str = "miniboard_dark";

/// Read the dark mode preference.
///
/// A stored preference wins; otherwise the system color scheme decides.
pub fn read_preference() -> bool {
    if let Some(val) = BrowserStorage.get_item(STORAGE_KEY) {
        return val == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(err) = el.set_attribute("data-theme", if enabled { "dark" } else { "light" }) {
                log::warn!("theme attribute not applied: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(err) = BrowserStorage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
        #[cfg(feature = "hydrate")]
        log::warn!("dark mode preference not saved: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
    }
    next
}
