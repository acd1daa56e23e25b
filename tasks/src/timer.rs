//! Focus/break countdown.
//!
//! The timer alternates between a focus phase and a break phase. While
//! running it is driven by one [`PomodoroTimer::tick`] per second; when the
//! remaining time reaches zero the mode flips and the clock restarts at the
//! full length of the new phase without stopping. The state machine is pure
//! so the browser interval only has to call `tick`.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use crate::consts::{BREAK_SECS, FOCUS_SECS};

/// Which phase the countdown is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimerMode {
    #[default]
    Focus,
    Break,
}

impl TimerMode {
    /// Full length of this phase in seconds.
    #[must_use]
    pub fn duration_secs(self) -> u32 {
        match self {
            Self::Focus => FOCUS_SECS,
            Self::Break => BREAK_SECS,
        }
    }

    /// The phase that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is paused; nothing changed.
    Idle,
    /// One second elapsed within the current phase.
    Counting,
    /// The phase ended and the timer switched to the given mode.
    Switched(TimerMode),
}

/// Countdown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroTimer {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
    completed_focus_sessions: u32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PomodoroTimer {
    /// A paused timer at the start of a focus phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TimerMode::Focus,
            remaining_secs: TimerMode::Focus.duration_secs(),
            running: false,
            completed_focus_sessions: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Focus phases that ran to zero.
    #[must_use]
    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return TickOutcome::Counting;
        }
        if self.mode == TimerMode::Focus {
            self.completed_focus_sessions += 1;
        }
        self.switch_to(self.mode.next());
        TickOutcome::Switched(self.mode)
    }

    /// Restart the current phase from its full length and pause.
    pub fn reset(&mut self) {
        self.remaining_secs = self.mode.duration_secs();
        self.running = false;
    }

    /// Jump to the next phase without counting the current one as completed.
    pub fn skip(&mut self) {
        self.switch_to(self.mode.next());
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Elapsed share of the current phase in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.mode.duration_secs());
        let remaining = f64::from(self.remaining_secs);
        ((total - remaining) / total).clamp(0.0, 1.0)
    }

    fn switch_to(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.remaining_secs = mode.duration_secs();
    }
}
