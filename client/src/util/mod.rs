//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so state models stay testable on the host.

pub mod dark_mode;
pub mod persistence;
pub mod storage;
