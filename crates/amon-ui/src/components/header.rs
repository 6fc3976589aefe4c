use amon_host::ServerId;
use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// Decorative note string placed either side of the application title.
pub const NOTES: &str = "♪ ♫";

/// Monitor header rendering four lines:
///
/// 1. Application title with note decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Server and frame-rate information in `[ server N | N fps ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Server connection being monitored.
    pub server: ServerId,
    /// Configured frame rate in frames per second.
    pub fps: u32,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(server: ServerId, fps: u32, theme: &'a Theme) -> Self {
        Self { server, fps, theme }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::styled(NOTES, self.theme.header_note),
                Span::styled(" VOICE CHANNEL AUDIO MONITOR ", self.theme.header),
                Span::styled(NOTES, self.theme.header_note),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(format!("server {}", self.server), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} fps", self.fps), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_to_lines_count() {
        let theme = Theme::dark();
        let header = Header::new(ServerId(1), 30, &theme);
        assert_eq!(header.to_lines().len(), 4, "header must produce exactly 4 lines");
    }

    #[test]
    fn test_header_title_line_content() {
        let theme = Theme::dark();
        let lines = Header::new(ServerId(1), 30, &theme).to_lines();
        let title = line_text(&lines[0]);
        assert!(title.contains("VOICE CHANNEL AUDIO MONITOR"), "got: {title}");
        assert!(title.contains(NOTES), "got: {title}");
    }

    #[test]
    fn test_header_separator_line() {
        let theme = Theme::dark();
        let lines = Header::new(ServerId(1), 30, &theme).to_lines();
        let sep = line_text(&lines[1]);
        assert_eq!(sep.chars().count(), 60);
        assert!(sep.chars().all(|c| c == '='));
    }

    #[test]
    fn test_header_info_line() {
        let theme = Theme::dark();
        let lines = Header::new(ServerId(3), 15, &theme).to_lines();
        let info = line_text(&lines[2]);
        assert_eq!(info, "[ server 3 | 15 fps ]");
        assert_eq!(lines[2].spans.len(), 5);
    }

    #[test]
    fn test_header_empty_fourth_line() {
        let theme = Theme::dark();
        let lines = Header::new(ServerId(1), 30, &theme).to_lines();
        assert!(line_text(&lines[3]).is_empty());
    }
}
