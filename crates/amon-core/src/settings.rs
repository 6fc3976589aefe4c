use clap::Parser;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Real-time voice channel audio monitor
#[derive(Parser, Debug, Clone)]
#[command(
    name = "audio-monitor",
    about = "Real-time audio level and talk-status monitoring",
    version
)]
pub struct Settings {
    /// Server connection to monitor
    #[arg(long, default_value = "1")]
    pub server: u64,

    /// Target frame rate in frames per second (1-60)
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..=60))]
    pub fps: u32,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::parse_from(["audio-monitor"]);
        assert_eq!(settings.server, 1);
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.theme, "auto");
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_settings_explicit_values() {
        let settings = Settings::parse_from([
            "audio-monitor",
            "--server",
            "3",
            "--fps",
            "15",
            "--theme",
            "dark",
            "--log-level",
            "DEBUG",
        ]);
        assert_eq!(settings.server, 3);
        assert_eq!(settings.fps, 15);
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_settings_fps_range_enforced() {
        assert!(Settings::try_parse_from(["audio-monitor", "--fps", "0"]).is_err());
        assert!(Settings::try_parse_from(["audio-monitor", "--fps", "61"]).is_err());
        assert!(Settings::try_parse_from(["audio-monitor", "--fps", "60"]).is_ok());
    }

    #[test]
    fn test_settings_rejects_unknown_theme() {
        assert!(Settings::try_parse_from(["audio-monitor", "--theme", "neon"]).is_err());
    }
}
