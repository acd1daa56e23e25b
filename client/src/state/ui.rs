//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the task models so either page can
//! change its layout without touching persisted data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which widget variant a page renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Kanban board with drag-and-drop columns.
    #[default]
    Board,
    /// Checklist with estimates and the focus timer.
    Tracker,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Board, Variant::Tracker];

    /// Route path of the page.
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Board => "/",
            Self::Tracker => "/tracker",
        }
    }

    /// Navigation link text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Tracker => "Tracker",
        }
    }

    /// Subtitle shown under the app name.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Board => "Version A: Kanban, quick add, saved locally",
            Self::Tracker => "Version B: checklist, estimates, focus timer",
        }
    }
}

/// UI state shared by both pages.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
