//! Screen geometry.
//!
//! [`MonitorLayout`] is computed once per frame from the current terminal
//! size and shared between the input phase (button hit-testing) and the
//! render phase, so the two can never disagree about where the button is.

use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Width of the record button column, borders included.
const BUTTON_WIDTH: u16 = 22;

/// Screen regions of the monitor view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorLayout {
    /// Title, separator, and info lines.
    pub header: Rect,
    /// Bordered level-meter panel.
    pub meter: Rect,
    /// Bordered record button; doubles as the pointer hit-rectangle.
    pub button: Rect,
    /// Bordered talker-list panel.
    pub talkers: Rect,
    /// One-line control hint.
    pub footer: Rect,
}

impl MonitorLayout {
    /// Split `area` into the monitor regions.
    pub fn compute(area: Rect) -> Self {
        let [header, controls, talkers, footer] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [meter, button] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(BUTTON_WIDTH)])
                .areas(controls);

        Self {
            header,
            meter,
            button,
            talkers,
            footer,
        }
    }

    /// Whether a pointer press at `(column, row)` lands on the record button.
    pub fn button_hit(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
