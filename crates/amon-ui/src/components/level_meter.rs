use amon_core::level::level_percent;
use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// Configuration controlling visual appearance of the level meter.
pub struct MeterConfig {
    /// Total width in terminal columns of the bar portion (excluding label).
    pub width: u16,
    /// Character used to fill the lit portion of the bar.
    pub filled_char: char,
    /// Character used to fill the unlit portion of the bar.
    pub empty_char: char,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            width: 50,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

// ── LevelMeter ────────────────────────────────────────────────────────────────

/// Horizontal bar mapping a decibel reading onto a lit proportion.
///
/// Renders as a zone-coloured fill + empty portion followed by the raw
/// decibel readout. The lit proportion and zone colour both derive from
/// [`level_percent`], so the bar clamps while the readout stays truthful for
/// out-of-range samples.
pub struct LevelMeter<'a> {
    /// Latest audio level in decibels.
    pub level_db: f64,
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
    /// Visual configuration.
    pub config: MeterConfig,
}

impl<'a> LevelMeter<'a> {
    /// Construct a new meter.
    pub fn new(level_db: f64, theme: &'a Theme) -> Self {
        Self {
            level_db,
            theme,
            config: MeterConfig::default(),
        }
    }

    /// Render the bar as a [`Line`] suitable for embedding in any ratatui
    /// widget that accepts `Line` values.
    pub fn to_line(&self) -> Line<'a> {
        let percent = level_percent(self.level_db);
        let filled = ((percent / 100.0) * self.config.width as f64) as u16;
        let empty = self.config.width.saturating_sub(filled);

        let bar_style = self.theme.meter_style(percent);

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        let label = format!(" {:.1} dB", self.level_db);

        Line::from(vec![
            Span::styled(filled_str, bar_style),
            Span::styled(empty_str, self.theme.meter_empty),
            Span::styled(label, self.theme.meter_label),
        ])
    }

    /// Render the tick ruler drawn under the bar.
    ///
    /// Ticks sit at 0, 20, 40, 60, 80, and 100 % of the bar width.
    pub fn ruler_line(&self) -> Line<'a> {
        let width = self.config.width as usize;
        if width < 2 {
            return Line::from("");
        }

        let mut ruler = vec![' '; width];
        for step in 0..=5 {
            let pos = ((width - 1) * step) / 5;
            ruler[pos] = '\u{2575}'; // ╵  BOX DRAWINGS LIGHT UP
        }

        Line::from(Span::styled(
            ruler.into_iter().collect::<String>(),
            self.theme.meter_label,
        ))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;
    use ratatui::style::Color;

    #[test]
    fn test_meter_half_scale() {
        let theme = Theme::dark();
        // -30 dB sits exactly halfway up the displayed range.
        let line = LevelMeter::new(-30.0, &theme).to_line();
        assert_eq!(line.spans.len(), 3, "expected filled, empty, label spans");

        assert_eq!(line.spans[0].content.chars().count(), 25);
        assert!(line.spans[0].content.chars().all(|c| c == '█'));
        assert_eq!(line.spans[1].content.chars().count(), 25);
        assert!(line.spans[1].content.chars().all(|c| c == '░'));
        assert!(line.spans[2].content.contains("-30.0 dB"));
    }

    #[test]
    fn test_meter_clamps_below_floor() {
        let theme = Theme::dark();
        let line = LevelMeter::new(-75.0, &theme).to_line();
        assert_eq!(line.spans[0].content.len(), 0);
        assert_eq!(line.spans[1].content.chars().count(), 50);
        // The readout keeps the raw value even though the bar clamps.
        assert!(line.spans[2].content.contains("-75.0 dB"));
    }

    #[test]
    fn test_meter_clamps_above_ceiling() {
        let theme = Theme::dark();
        let line = LevelMeter::new(2.5, &theme).to_line();
        assert_eq!(line.spans[0].content.chars().count(), 50);
        assert_eq!(line.spans[1].content.len(), 0);
    }

    #[test]
    fn test_meter_zone_colours() {
        let theme = Theme::dark();
        // -6 dB → 90 % → alert.
        let line = LevelMeter::new(-6.0, &theme).to_line();
        assert_eq!(line.spans[0].style.fg, Some(Color::Red));
        // -21 dB → 65 % → warning.
        let line = LevelMeter::new(-21.0, &theme).to_line();
        assert_eq!(line.spans[0].style.fg, Some(Color::Yellow));
        // -45 dB → 25 % → nominal.
        let line = LevelMeter::new(-45.0, &theme).to_line();
        assert_eq!(line.spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_ruler_has_six_ticks() {
        let theme = Theme::dark();
        let line = LevelMeter::new(-30.0, &theme).ruler_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.chars().count(), 50);
        assert_eq!(text.chars().filter(|c| *c == '╵').count(), 6);
        assert_eq!(text.chars().next(), Some('╵'));
        assert_eq!(text.chars().last(), Some('╵'));
    }
}
