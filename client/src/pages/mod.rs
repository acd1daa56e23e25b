//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (persistence wiring, layout) and
//! delegates rendering details to `components`.

pub mod board;
pub mod tracker;
