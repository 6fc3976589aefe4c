//! Talk-status event delivery.
//!
//! The host fires an event whenever a participant starts or stops
//! transmitting. [`apply_talk_event`] is the bridge between that callback
//! world and the [`TelemetryStore`]: it resolves the display name, applies
//! the matching store mutator, and emits the join/leave log lines. It is safe
//! to call from any thread.

use amon_core::telemetry::{ClientId, TelemetryStore};

use crate::api::{ServerId, VoiceHost};

// ── Event types ───────────────────────────────────────────────────────────────

/// Direction of a talk-status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkStatus {
    /// The participant began transmitting voice.
    Started,
    /// The participant stopped transmitting voice.
    Stopped,
}

/// One talk-status change delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TalkEvent {
    /// Server connection the event belongs to.
    pub server: ServerId,
    /// Participant whose status changed.
    pub client: ClientId,
    /// Started or stopped.
    pub status: TalkStatus,
}

// ── Bridge ────────────────────────────────────────────────────────────────────

/// Apply one host-fired talk event to the store.
///
/// A start event for a client whose name cannot be resolved (or resolves
/// empty) is dropped without creating an entry. A stop event for an unknown
/// client is a no-op.
pub fn apply_talk_event(store: &TelemetryStore, host: &dyn VoiceHost, event: &TalkEvent) {
    match event.status {
        TalkStatus::Started => {
            let Some(name) = host.resolve_name(event.server, event.client) else {
                tracing::debug!(client = %event.client, "dropping talk start for unnamed client");
                return;
            };
            if store.on_talk_started(event.client, &name) {
                tracing::info!(%name, "started talking");
            }
        }
        TalkStatus::Stopped => {
            if let Some(name) = store.on_talk_stopped(event.client) {
                tracing::info!(%name, "stopped talking");
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
