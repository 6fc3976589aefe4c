//! The capability surface the monitor consumes from its host.

use amon_core::telemetry::ClientId;

use crate::error::HostError;

// ── ServerId ──────────────────────────────────────────────────────────────────

/// Opaque identifier of one server connection inside the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerId(pub u64);

impl std::fmt::Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── VoiceHost ─────────────────────────────────────────────────────────────────

/// The fixed API the host exposes to the monitor.
///
/// Every call is synchronous and expected to return well within one frame
/// interval. Implementations must tolerate being called from the monitor-loop
/// thread while talk events are delivered from the host's own thread, hence
/// the `Send + Sync` bound.
pub trait VoiceHost: Send + Sync {
    /// Sample the instantaneous capture level in decibels.
    fn poll_level(&self, server: ServerId) -> Result<f64, HostError>;

    /// Ask the host to start recording the channel.
    ///
    /// `Ok(())` means the transition is confirmed; any error means the
    /// recording state did not change.
    fn start_recording(&self, server: ServerId) -> Result<(), HostError>;

    /// Ask the host to stop recording the channel.
    fn stop_recording(&self, server: ServerId) -> Result<(), HostError>;

    /// Look up a participant's display name.
    ///
    /// `None` when the client is unknown or has no usable name; the caller
    /// drops the corresponding talk event.
    fn resolve_name(&self, server: ServerId, client: ClientId) -> Option<String>;
}
