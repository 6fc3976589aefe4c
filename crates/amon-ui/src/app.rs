//! Fixed-rate monitor loop.
//!
//! [`App`] drives the per-frame cycle over the shared [`TelemetryStore`]:
//! drain input, poll the level source, resolve a pending recording toggle,
//! render, then sleep out the rest of the frame interval. Failures inside a
//! frame are logged and the loop continues; only terminal-setup failures and
//! an explicit close request end it.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use amon_core::telemetry::TelemetryStore;
use amon_host::{ServerId, VoiceHost};

use crate::layout::MonitorLayout;
use crate::monitor_view;
use crate::themes::Theme;

// ── App ───────────────────────────────────────────────────────────────────────

/// Root state of the monitor loop.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Target frame rate in frames per second.
    pub fps: u32,
    /// Set to `true` to break out of the loop on the next iteration.
    pub should_quit: bool,
    /// A user-initiated intent to flip the recording state, resolved against
    /// the host at most once per frame.
    toggle_requested: bool,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, fps: u32) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            fps: fps.clamp(1, 60),
            should_quit: false,
            toggle_requested: false,
        }
    }

    // ── Public event loop ─────────────────────────────────────────────────────

    /// Run the monitor loop until the user closes it.
    ///
    /// Acquires the terminal (raw mode, alternate screen, mouse capture) and
    /// releases it on the way out. Setup failures propagate to the caller;
    /// everything that goes wrong inside a frame is logged and swallowed so
    /// that only a close request ends the loop.
    pub async fn run(
        mut self,
        store: TelemetryStore,
        host: Arc<dyn VoiceHost>,
        server: ServerId,
    ) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let frame_interval = Duration::from_secs_f64(1.0 / f64::from(self.fps));
        let mut next_tick = Instant::now() + frame_interval;
        let mut layout = MonitorLayout::compute(Rect::new(0, 0, 80, 24));

        loop {
            // The layout is computed once per frame and shared between the
            // hit-test below and the render call, so input and drawing agree
            // on the button rectangle.
            match terminal.size() {
                Ok(size) => layout = MonitorLayout::compute(Rect::new(0, 0, size.width, size.height)),
                Err(e) => tracing::warn!(error = %e, "could not query terminal size"),
            }

            // Input phase: drain everything that arrived since the last frame.
            while matches!(event::poll(Duration::ZERO), Ok(true)) {
                match event::read() {
                    Ok(ev) => self.handle_event(&ev, &layout),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read input event");
                        break;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // Poll phase: one synchronous level sample per frame.
            match host.poll_level(server) {
                Ok(db) => {
                    if let Err(e) = store.set_level(db) {
                        tracing::warn!(error = %e, "discarding malformed level sample");
                    }
                }
                Err(e) => tracing::debug!(error = %e, "level poll failed; keeping last reading"),
            }

            // Toggle phase: resolve at most one pending request.
            self.resolve_toggle(&store, host.as_ref(), server);

            // Render phase: pure function of the snapshot.
            let snapshot = store.snapshot();
            if let Err(e) = terminal.draw(|frame| {
                monitor_view::render(frame, &layout, &snapshot, server, self.fps, &self.theme)
            }) {
                tracing::warn!(error = %e, "frame render failed");
            }

            // Frame pacing: sleep out the remainder of the interval. Overlong
            // frames push the schedule back instead of bursting to catch up.
            let now = Instant::now();
            if now < next_tick {
                std::thread::sleep(next_tick - now);
            }
            next_tick += frame_interval;
            let now = Instant::now();
            if next_tick < now {
                next_tick = now + frame_interval;
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    // ── Per-frame phases ──────────────────────────────────────────────────────

    /// Apply one UI input event.
    ///
    /// `q`, `Q`, and `Ctrl+C` request close. A left press inside the button
    /// rectangle, or `r`/`R`, raises a toggle request.
    fn handle_event(&mut self, event: &Event, layout: &MonitorLayout) {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                KeyCode::Char('r') | KeyCode::Char('R') => self.toggle_requested = true,
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if layout.button_hit(mouse.column, mouse.row) {
                    self.toggle_requested = true;
                }
            }
            _ => {}
        }
    }

    /// Resolve a pending toggle request against the host.
    ///
    /// Invokes whichever command is the inverse of the current state. The
    /// store flips only on a confirmed transition; a rejected command leaves
    /// it untouched.
    fn resolve_toggle(&mut self, store: &TelemetryStore, host: &dyn VoiceHost, server: ServerId) {
        if !self.toggle_requested {
            return;
        }
        self.toggle_requested = false;

        let recording = store.recording();
        let outcome = if recording {
            host.stop_recording(server)
        } else {
            host.start_recording(server)
        };

        match outcome {
            Ok(()) => {
                store.set_recording(!recording);
                if recording {
                    tracing::info!("recording stopped");
                } else {
                    tracing::info!("recording started");
                }
            }
            Err(e) => tracing::warn!(error = %e, "recording toggle failed"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
