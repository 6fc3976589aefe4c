//! Shared telemetry store.
//!
//! [`TelemetryStore`] is the single source of truth for the current audio
//! level, the set of actively-talking participants, and the recording flag.
//! The host delivers talk-status events from its own thread while the monitor
//! loop polls and renders from another, so the store is a cheaply cloneable
//! handle around a mutex. Every operation takes the lock only for the single
//! field update it performs; no I/O ever happens under the lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{MonitorError, Result};
use crate::level::DB_FLOOR;

// ── ClientId ──────────────────────────────────────────────────────────────────

/// Opaque participant identifier assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub u16);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// One frame's view of the telemetry state.
///
/// Taken under a single lock acquisition so the render phase sees a coherent
/// `(level, talkers, recording)` triple. Rendering is a pure function of this
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Latest known audio level in decibels.
    pub level_db: f64,
    /// Whether recording is currently confirmed active.
    pub recording: bool,
    /// Actively-talking participants in insertion order.
    pub talkers: Vec<(ClientId, String)>,
}

// ── TelemetryStore ────────────────────────────────────────────────────────────

struct Inner {
    level_db: f64,
    recording: bool,
    // Insertion-ordered; at most one entry per id.
    talkers: Vec<(ClientId, String)>,
}

/// Shared handle to the telemetry state.
///
/// Clones are shallow; all clones observe the same state.
#[derive(Clone)]
pub struct TelemetryStore {
    inner: Arc<Mutex<Inner>>,
}

impl TelemetryStore {
    /// Create a store with no talkers, recording off, and the level parked at
    /// the bottom of the displayed range.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                level_db: DB_FLOOR,
                recording: false,
                talkers: Vec::new(),
            })),
        }
    }

    /// Overwrite the audio level with a fresh sample.
    ///
    /// Any finite value is accepted as-is; display clamping happens at render
    /// time. A non-finite sample is rejected and the previous level is kept.
    pub fn set_level(&self, db: f64) -> Result<()> {
        if !db.is_finite() {
            return Err(MonitorError::NonFiniteLevel(db));
        }
        self.inner.lock().level_db = db;
        Ok(())
    }

    /// Latest known audio level in decibels.
    pub fn level_db(&self) -> f64 {
        self.inner.lock().level_db
    }

    /// Record that a participant started talking.
    ///
    /// Returns `true` if a new entry was inserted. A second start event for
    /// an id already present is a no-op, and an empty name drops the event
    /// entirely (unnamed participants are not surfaced).
    pub fn on_talk_started(&self, id: ClientId, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let mut inner = self.inner.lock();
        if inner.talkers.iter().any(|(existing, _)| *existing == id) {
            return false;
        }
        inner.talkers.push((id, name.to_string()));
        true
    }

    /// Record that a participant stopped talking.
    ///
    /// Returns the removed display name, or `None` if the id was not present
    /// (in which case nothing changes).
    pub fn on_talk_stopped(&self, id: ClientId) -> Option<String> {
        let mut inner = self.inner.lock();
        let pos = inner.talkers.iter().position(|(existing, _)| *existing == id)?;
        Some(inner.talkers.remove(pos).1)
    }

    /// Overwrite the recording flag.
    ///
    /// Called only after the host confirmed the corresponding transition.
    pub fn set_recording(&self, flag: bool) {
        self.inner.lock().recording = flag;
    }

    /// Whether recording is currently confirmed active.
    pub fn recording(&self) -> bool {
        self.inner.lock().recording
    }

    /// Copy the current state out under one lock acquisition.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        Snapshot {
            level_db: inner.level_db,
            recording: inner.recording,
            talkers: inner.talkers.clone(),
        }
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
