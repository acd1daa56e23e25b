//! Task-list domain logic for the MiniBoard widget.
//!
//! This crate is shared by the Leptos client (compiled to WebAssembly) and the
//! host-side tests. It owns every state transition the UI performs on its task
//! collections: adding, patching, moving, deleting, filtering and aggregating
//! tasks, plus the focus/break countdown used by the tracker page. Nothing in
//! here touches the DOM; browser storage is reached through the
//! [`store::KeyValueStore`] trait so the same load/save rules run in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`kanban`] | Kanban tasks, status columns, search and drag state |
//! | [`tracker`] | Checklist tasks with estimates, categories and stats |
//! | [`timer`] | Two-phase focus/break countdown state machine |
//! | [`store`] | JSON codec and load-or-seed persistence rules |
//! | [`ids`] | Task identifier generation and uniqueness checks |
//! | [`consts`] | Storage keys, durations and clamp bounds |

pub mod consts;
pub mod ids;
pub mod kanban;
pub mod store;
pub mod timer;
pub mod tracker;
