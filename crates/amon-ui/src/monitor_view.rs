//! Composed monitor screen.
//!
//! Pulls the header, level meter, record button, and talker list together
//! into one frame. Rendering is a pure function of the telemetry
//! [`Snapshot`] plus fixed session parameters; it never mutates state.

use amon_core::telemetry::Snapshot;
use amon_host::ServerId;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::header::Header;
use crate::components::level_meter::LevelMeter;
use crate::components::record_button::RecordButton;
use crate::components::talker_list::TalkerList;
use crate::layout::MonitorLayout;
use crate::themes::Theme;

/// Hint line shown at the bottom of the screen.
const FOOTER_HINT: &str = "Click the REC button or press r to toggle recording | q quits";

/// Render one frame of the monitor view into the given layout regions.
pub fn render(
    frame: &mut Frame,
    layout: &MonitorLayout,
    snapshot: &Snapshot,
    server: ServerId,
    fps: u32,
    theme: &Theme,
) {
    // Header.
    let header = Header::new(server, fps, theme);
    frame.render_widget(Paragraph::new(header.to_lines()), layout.header);

    // Level meter.
    let meter = LevelMeter::new(snapshot.level_db, theme);
    let meter_panel = Paragraph::new(vec![meter.to_line(), meter.ruler_line()]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.separator)
            .title("Microphone Level"),
    );
    frame.render_widget(meter_panel, layout.meter);

    // Record button.
    let button = RecordButton::new(snapshot.recording, theme);
    let button_panel = Paragraph::new(button.to_lines())
        .alignment(Alignment::Center)
        .style(button.fill_style())
        .block(Block::default().borders(Borders::ALL).border_style(theme.text));
    frame.render_widget(button_panel, layout.button);

    // Talker list.
    let rows = layout.talkers.height.saturating_sub(2) as usize;
    let width = layout.talkers.width.saturating_sub(2) as usize;
    let list = TalkerList::new(&snapshot.talkers, theme);
    let talker_panel = Paragraph::new(list.to_lines(rows, width)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.separator)
            .title("Currently Talking:"),
    );
    frame.render_widget(talker_panel, layout.talkers);

    // Footer.
    frame.render_widget(
        Paragraph::new(FOOTER_HINT).style(theme.dim),
        layout.footer,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use amon_core::telemetry::ClientId;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    fn snapshot() -> Snapshot {
        Snapshot {
            level_db: -18.0,
            recording: true,
            talkers: vec![
                (ClientId(2), "Aurora".to_string()),
                (ClientId(5), "Briggs".to_string()),
            ],
        }
    }

    fn draw(snap: &Snapshot) -> Buffer {
        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let layout = MonitorLayout::compute(Rect::new(0, 0, 90, 24));
        terminal
            .draw(|frame| render(frame, &layout, snap, ServerId(1), 30, &theme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_is_pure_over_snapshot() {
        let snap = snapshot();
        let first = draw(&snap);
        let second = draw(&snap);
        assert_eq!(first, second, "identical snapshots must render identically");
    }

    #[test]
    fn test_render_differs_when_snapshot_differs() {
        let armed = snapshot();
        let mut idle = snapshot();
        idle.recording = false;
        assert_ne!(draw(&armed), draw(&idle));
    }

    #[test]
    fn test_render_shows_expected_panels() {
        let text = buffer_text(&draw(&snapshot()));
        assert!(text.contains("VOICE CHANNEL AUDIO MONITOR"));
        assert!(text.contains("Microphone Level"));
        assert!(text.contains("STOP REC"));
        assert!(text.contains("RECORDING"));
        assert!(text.contains("Aurora"));
        assert!(text.contains("Briggs"));
        assert!(text.contains("-18.0 dB"));
    }

    #[test]
    fn test_render_idle_empty_state() {
        let snap = Snapshot {
            level_db: -60.0,
            recording: false,
            talkers: vec![],
        };
        let text = buffer_text(&draw(&snap));
        assert!(text.contains("START REC"));
        assert!(!text.contains("● RECORDING"));
        assert!(text.contains("(no one)"));
    }
}
