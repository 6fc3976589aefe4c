use thiserror::Error;

/// All errors produced by the audio monitor.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// A level sample was not a finite number and was discarded.
    #[error("Non-finite audio level sample: {0}")]
    NonFiniteLevel(f64),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the monitor crates.
pub type Result<T> = std::result::Result<T, MonitorError>;
