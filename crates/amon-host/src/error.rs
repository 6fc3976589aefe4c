use thiserror::Error;

/// Failures reported by the host across the capability boundary.
///
/// Both variants are transient from the monitor's point of view: the loop
/// logs them at the frame boundary and carries on with unchanged state.
#[derive(Error, Debug)]
pub enum HostError {
    /// The level source could not produce a sample this frame.
    #[error("Audio level unavailable: {0}")]
    LevelUnavailable(String),

    /// The host refused a recording start/stop command.
    #[error("Recording command rejected: {0}")]
    CommandRejected(String),
}
