//! Shared constants for the tasks crate.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the Kanban task array.
pub const KANBAN_STORAGE_KEY: &str = "merge_demo_items";

/// `localStorage` key holding the tracker task array.
pub const TRACKER_STORAGE_KEY: &str = "merge_demo_tracker";

// ── Estimates ───────────────────────────────────────────────────

/// Smallest estimate a tracker task may carry, in minutes.
pub const MIN_ESTIMATE_MINUTES: u32 = 5;

/// Largest estimate a tracker task may carry, in minutes.
pub const MAX_ESTIMATE_MINUTES: u32 = 240;

/// Estimate used when the input field holds something that is not a number.
pub const DEFAULT_ESTIMATE_MINUTES: u32 = 25;

// ── Countdown ───────────────────────────────────────────────────

/// Length of a focus phase in seconds (25 minutes).
pub const FOCUS_SECS: u32 = 25 * 60;

/// Length of a break phase in seconds (5 minutes).
pub const BREAK_SECS: u32 = 5 * 60;

/// Interval between countdown ticks in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 1_000;
