//! Task identifiers.
//!
//! Identifiers are opaque strings so that records written by older builds
//! (which used random hex + timestamp ids) still load unchanged.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use std::collections::HashSet;

use uuid::Uuid;

/// Identifier of a task within one collection.
pub type TaskId = String;

/// Anything stored in a task collection that carries an identifier.
pub trait Identified {
    /// The record's identifier.
    fn id(&self) -> &str;
}

/// Generate a fresh task identifier.
#[must_use]
pub fn new_task_id() -> TaskId {
    Uuid::new_v4().simple().to_string()
}

/// Returns `true` if no two records in `items` share an identifier.
#[must_use]
pub fn has_unique_ids<T: Identified>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id()))
}
