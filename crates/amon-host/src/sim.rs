//! Deterministic stand-in host.
//!
//! [`SimulatedHost`] plays the role of the voice-chat host when the monitor
//! runs on its own: it synthesizes a wandering capture level, resolves names
//! from a fixed roster, confirms every recording command, and can drive a
//! scripted talk-status feed into the store from a background task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use amon_core::level::{DB_CEILING, DB_FLOOR};
use amon_core::telemetry::{ClientId, TelemetryStore};

use crate::api::{ServerId, VoiceHost};
use crate::error::HostError;
use crate::events::{apply_talk_event, TalkEvent, TalkStatus};

/// Participants the simulated host knows about.
const ROSTER: &[(u16, &str)] = &[
    (2, "Aurora"),
    (5, "Briggs"),
    (9, "Castor"),
    (12, "Dalia"),
];

/// Talk-status sequence the feed cycles through, one entry per tick.
const SCRIPT: &[(TalkStatus, u16)] = &[
    (TalkStatus::Started, 2),
    (TalkStatus::Started, 5),
    (TalkStatus::Stopped, 2),
    (TalkStatus::Started, 9),
    (TalkStatus::Stopped, 5),
    (TalkStatus::Started, 12),
    (TalkStatus::Stopped, 9),
    (TalkStatus::Stopped, 12),
];

/// Interval between scripted talk events.
const FEED_TICK: Duration = Duration::from_millis(1600);

// ── SimulatedHost ─────────────────────────────────────────────────────────────

/// In-process host implementation with deterministic behavior.
pub struct SimulatedHost {
    started: Instant,
    recording: AtomicBool,
}

impl SimulatedHost {
    /// Create a simulated host; the level sweep starts at construction time.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            recording: AtomicBool::new(false),
        }
    }

    /// Whether the host currently believes it is recording.
    pub fn is_recording(&self) -> bool {
        self.recording.load(Ordering::Relaxed)
    }

    /// Spawn the scripted talk-status feed.
    ///
    /// The feed runs on a tokio task, delivering one [`SCRIPT`] entry per
    /// tick into `store` through the event bridge, the same path a real
    /// host's callback thread would take.
    pub fn spawn_talk_feed(self: Arc<Self>, store: TelemetryStore, server: ServerId) -> FeedHandle {
        let host = self;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(FEED_TICK);
            let mut step = 0usize;
            loop {
                interval.tick().await;
                let (status, client) = SCRIPT[step % SCRIPT.len()];
                let event = TalkEvent {
                    server,
                    client: ClientId(client),
                    status,
                };
                apply_talk_event(&store, host.as_ref(), &event);
                step += 1;
            }
        });
        FeedHandle { handle }
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceHost for SimulatedHost {
    fn poll_level(&self, _server: ServerId) -> Result<f64, HostError> {
        let t = self.started.elapsed().as_secs_f64();
        // Two incommensurate sines make a wandering, speech-like envelope.
        let envelope = 0.55 + 0.45 * (0.9 * (1.3 * t).sin() + 0.1 * (7.1 * t).sin());
        Ok(DB_FLOOR + envelope.clamp(0.0, 1.0) * (DB_CEILING - DB_FLOOR))
    }

    fn start_recording(&self, _server: ServerId) -> Result<(), HostError> {
        self.recording.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn stop_recording(&self, _server: ServerId) -> Result<(), HostError> {
        self.recording.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn resolve_name(&self, _server: ServerId, client: ClientId) -> Option<String> {
        ROSTER
            .iter()
            .find(|(id, _)| *id == client.0)
            .map(|(_, name)| name.to_string())
    }
}

// ── FeedHandle ────────────────────────────────────────────────────────────────

/// A handle to the background talk feed.
///
/// Drop or call [`FeedHandle::abort`] to stop the feed.
pub struct FeedHandle {
    handle: tokio::task::JoinHandle<()>,
}

impl FeedHandle {
    /// Immediately stop the talk feed.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
