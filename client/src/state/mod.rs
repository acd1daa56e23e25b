//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split per page (`board`, `tracker`) plus presentation chrome
//! (`ui`). Each model wraps a `tasks` collection with the transient form and
//! selection fields its page needs, and is provided as an `RwSignal` context.

pub mod board;
pub mod tracker;
pub mod ui;
