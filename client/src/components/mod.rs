//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board and tracker surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod detail_panel;
pub mod focus_timer;
pub mod kanban_column;
pub mod quick_add;
pub mod task_card;
pub mod toolbar;
pub mod tracker_form;
pub mod tracker_row;
pub mod tracker_stats;
