use amon_core::level::MeterZone;
use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by amon-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_note: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub label: Style,
    pub value: Style,

    // ── Level meter ──────────────────────────────────────────────────────────
    /// Filled portion while the level sits in the nominal zone.
    pub meter_nominal: Style,
    /// Filled portion in the warning zone.
    pub meter_warning: Style,
    /// Filled portion in the alert zone.
    pub meter_alert: Style,
    /// Unfilled portion of the meter bar.
    pub meter_empty: Style,
    /// The decibel readout after the bar and the tick ruler under it.
    pub meter_label: Style,

    // ── Record button ────────────────────────────────────────────────────────
    /// Button fill while recording is confirmed active.
    pub button_armed: Style,
    /// Button fill while idle.
    pub button_idle: Style,
    /// The `● RECORDING` status text.
    pub recording_status: Style,

    // ── Talker list ──────────────────────────────────────────────────────────
    /// The `●` talk indicator in front of each name.
    pub talker_dot: Style,
    /// Participant display names.
    pub talker_name: Style,
    /// The `(no one)` placeholder.
    pub talker_empty: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_note: Style::default().fg(Color::Cyan),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            meter_nominal: Style::default().fg(Color::Green),
            meter_warning: Style::default().fg(Color::Yellow),
            meter_alert: Style::default().fg(Color::Red),
            meter_empty: Style::default().fg(Color::DarkGray),
            meter_label: Style::default().fg(Color::Gray),

            button_armed: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            button_idle: Style::default().fg(Color::White).bg(Color::DarkGray),
            recording_status: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            talker_dot: Style::default().fg(Color::Green),
            talker_name: Style::default().fg(Color::White),
            talker_empty: Style::default().fg(Color::Gray),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text so that content remains legible against a
    /// white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_note: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            meter_nominal: Style::default().fg(Color::Green),
            meter_warning: Style::default().fg(Color::Yellow),
            meter_alert: Style::default().fg(Color::Red),
            meter_empty: Style::default().fg(Color::Gray),
            meter_label: Style::default().fg(Color::DarkGray),

            button_armed: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            button_idle: Style::default().fg(Color::Black).bg(Color::Gray),
            recording_status: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            talker_dot: Style::default().fg(Color::Green),
            talker_name: Style::default().fg(Color::Black),
            talker_empty: Style::default().fg(Color::DarkGray),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Blue),
            header_note: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            meter_nominal: Style::default().fg(Color::Green),
            meter_warning: Style::default().fg(Color::Yellow),
            meter_alert: Style::default().fg(Color::Red),
            meter_empty: Style::default().fg(Color::DarkGray),
            meter_label: Style::default().fg(Color::White),

            button_armed: Style::default().fg(Color::White).bg(Color::Red),
            button_idle: Style::default().fg(Color::White).bg(Color::DarkGray),
            recording_status: Style::default().fg(Color::Red),

            talker_dot: Style::default().fg(Color::Green),
            talker_name: Style::default().fg(Color::White),
            talker_empty: Style::default().fg(Color::Gray),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Return the meter fill style for a given percentage.
    ///
    /// Zone boundaries are exclusive lower bounds:
    ///
    /// * `> 80 %` → `meter_alert`
    /// * `> 60 %` → `meter_warning`
    /// * otherwise → `meter_nominal`
    pub fn meter_style(&self, percentage: f64) -> Style {
        match MeterZone::for_percent(percentage) {
            MeterZone::Alert => self.meter_alert,
            MeterZone::Warning => self.meter_warning,
            MeterZone::Nominal => self.meter_nominal,
        }
    }

    /// Return the button fill style for the given recording state.
    pub fn button_style(&self, recording: bool) -> Style {
        if recording {
            self.button_armed
        } else {
            self.button_idle
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
