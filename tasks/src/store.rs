//! Persistence rules for task collections.
//!
//! A collection is stored as one JSON array under a fixed key and rewritten
//! wholesale on every change. Loading is forgiving: a missing key, a value
//! that does not parse, or an array with duplicate ids all fall back to the
//! caller's seed list. The browser adapter lives in the client crate; this
//! module only sees the [`KeyValueStore`] trait.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ids::{Identified, has_unique_ids};

/// Error returned by the codec and by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The stored value is not a valid task array.
    #[error("failed to decode stored tasks: {0}")]
    Decode(#[source] serde_json::Error),
    /// The task array could not be serialized.
    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
    /// The stored array contains the same id more than once.
    #[error("stored tasks contain duplicate ids")]
    DuplicateIds,
    /// The backend refused the write (quota, private mode, ...).
    #[error("storage backend rejected write: {0}")]
    Backend(String),
}

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    /// Raw value under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store used by tests and by server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Parse a stored task array.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] for invalid JSON or records, and
/// [`StoreError::DuplicateIds`] if two records share an id.
pub fn decode<T>(raw: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned + Identified,
{
    let items: Vec<T> = serde_json::from_str(raw).map_err(StoreError::Decode)?;
    if !has_unique_ids(&items) {
        return Err(StoreError::DuplicateIds);
    }
    Ok(items)
}

/// Serialize a task array for storage.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(StoreError::Encode)
}

/// Outcome of [`load`]: where the returned tasks came from.
#[derive(Debug)]
pub enum Loaded<T> {
    /// Tasks read back from storage.
    Stored(Vec<T>),
    /// Nothing was stored under the key.
    Empty,
    /// Something was stored but could not be used.
    Invalid(StoreError),
}

impl<T> Loaded<T> {
    /// Stored tasks, or `seed()` when nothing usable was stored.
    ///
    /// The decode error, if any, is handed back for the caller to log.
    #[must_use]
    pub fn or_seed(self, seed: impl FnOnce() -> Vec<T>) -> (Vec<T>, Option<StoreError>) {
        match self {
            Self::Stored(items) => (items, None),
            Self::Empty => (seed(), None),
            Self::Invalid(err) => (seed(), Some(err)),
        }
    }
}

/// Read and decode the collection under `key`.
pub fn load<T, S>(store: &S, key: &str) -> Loaded<T>
where
    T: DeserializeOwned + Identified,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_item(key) else {
        return Loaded::Empty;
    };
    match decode(&raw) {
        Ok(items) => Loaded::Stored(items),
        Err(err) => Loaded::Invalid(err),
    }
}

/// Read the collection under `key`, falling back to `seed` when nothing
/// usable is stored.
pub fn load_or_seed<T, S>(store: &S, key: &str, seed: impl FnOnce() -> Vec<T>) -> Vec<T>
where
    T: DeserializeOwned + Identified,
    S: KeyValueStore + ?Sized,
{
    load(store, key).or_seed(seed).0
}

/// Rewrite the whole collection under `key`.
///
/// # Errors
///
/// Returns an encode error or whatever the backend reports.
pub fn save<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = encode(items)?;
    store.set_item(key, &raw)
}
