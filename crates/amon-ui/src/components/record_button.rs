use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// The clickable recording control.
///
/// Label and fill colour reflect the current confirmed recording state; the
/// third line carries the `● RECORDING` status while armed.
pub struct RecordButton<'a> {
    /// Current confirmed recording state.
    pub recording: bool,
    /// Theme providing colour styles.
    pub theme: &'a Theme,
}

impl<'a> RecordButton<'a> {
    /// Construct a new button.
    pub fn new(recording: bool, theme: &'a Theme) -> Self {
        Self { recording, theme }
    }

    /// The action label shown on the button face.
    pub fn label(&self) -> &'static str {
        if self.recording {
            "■ STOP REC"
        } else {
            "▶ START REC"
        }
    }

    /// Fill style for the whole button face.
    pub fn fill_style(&self) -> Style {
        self.theme.button_style(self.recording)
    }

    /// Render the button face as three lines (blank, label, status).
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let status = if self.recording {
            Line::from(Span::styled("● RECORDING", self.theme.recording_status))
        } else {
            Line::from("")
        };

        vec![Line::from(""), Line::from(self.label()), status]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;
    use ratatui::style::Color;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_label_by_state() {
        let theme = Theme::dark();
        assert_eq!(RecordButton::new(false, &theme).label(), "▶ START REC");
        assert_eq!(RecordButton::new(true, &theme).label(), "■ STOP REC");
    }

    #[test]
    fn test_fill_style_by_state() {
        let theme = Theme::dark();
        assert_eq!(
            RecordButton::new(true, &theme).fill_style().bg,
            Some(Color::Red)
        );
        assert_eq!(
            RecordButton::new(false, &theme).fill_style().bg,
            Some(Color::DarkGray)
        );
    }

    #[test]
    fn test_status_line_only_while_recording() {
        let theme = Theme::dark();

        let lines = RecordButton::new(true, &theme).to_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[2]), "● RECORDING");

        let lines = RecordButton::new(false, &theme).to_lines();
        assert!(line_text(&lines[2]).is_empty());
    }
}
