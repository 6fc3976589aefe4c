use amon_core::telemetry::ClientId;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::themes::Theme;

/// The "Currently Talking" panel body.
///
/// Renders one `●`-prefixed row per talker in insertion order, truncated to
/// the rows that fit the panel, or a `(no one)` placeholder when the set is
/// empty.
pub struct TalkerList<'a> {
    /// Talkers in insertion order.
    pub talkers: &'a [(ClientId, String)],
    /// Theme providing colour styles.
    pub theme: &'a Theme,
}

impl<'a> TalkerList<'a> {
    /// Construct a new list.
    pub fn new(talkers: &'a [(ClientId, String)], theme: &'a Theme) -> Self {
        Self { talkers, theme }
    }

    /// Render at most `max_rows` rows, each fitted to `max_width` columns.
    pub fn to_lines(&self, max_rows: usize, max_width: usize) -> Vec<Line<'a>> {
        if self.talkers.is_empty() {
            return vec![Line::from(Span::styled("(no one)", self.theme.talker_empty))];
        }

        // Two columns go to the dot prefix.
        let name_width = max_width.saturating_sub(2);

        self.talkers
            .iter()
            .take(max_rows)
            .map(|(_, name)| {
                Line::from(vec![
                    Span::styled("● ", self.theme.talker_dot),
                    Span::styled(fit_width(name, name_width), self.theme.talker_name),
                ])
            })
            .collect()
    }
}

/// Truncate `text` so its display width does not exceed `max` columns.
///
/// Counts display columns rather than chars so double-width glyphs cannot
/// overflow the panel.
fn fit_width(text: &str, max: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let cw = ch.width().unwrap_or(0);
        if width + cw > max {
            break;
        }
        width += cw;
        out.push(ch);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    fn talkers(names: &[&str]) -> Vec<(ClientId, String)> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (ClientId(i as u16), name.to_string()))
            .collect()
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_set_shows_placeholder() {
        let theme = Theme::dark();
        let set = talkers(&[]);
        let lines = TalkerList::new(&set, &theme).to_lines(10, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "(no one)");
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let theme = Theme::dark();
        let set = talkers(&["Dana", "Bob", "Hugo"]);
        let lines = TalkerList::new(&set, &theme).to_lines(10, 40);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "● Dana");
        assert_eq!(line_text(&lines[1]), "● Bob");
        assert_eq!(line_text(&lines[2]), "● Hugo");
    }

    #[test]
    fn test_rows_truncate_to_visible_area() {
        let theme = Theme::dark();
        let set = talkers(&["a", "b", "c", "d", "e"]);
        let lines = TalkerList::new(&set, &theme).to_lines(2, 40);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[1]), "● b");
    }

    #[test]
    fn test_names_fit_panel_width() {
        let theme = Theme::dark();
        let set = talkers(&["Bartholomew Montgomery"]);
        let lines = TalkerList::new(&set, &theme).to_lines(10, 10);
        // 2 columns of prefix + 8 of name.
        assert_eq!(line_text(&lines[0]), "● Bartholo");
    }

    #[test]
    fn test_fit_width_counts_display_columns() {
        // Each CJK glyph is two columns wide.
        assert_eq!(fit_width("日本語テスト", 5), "日本");
        assert_eq!(fit_width("abc", 5), "abc");
        assert_eq!(fit_width("abcdef", 4), "abcd");
    }
}
