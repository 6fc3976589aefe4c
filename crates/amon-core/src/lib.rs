//! Core data model for the audio monitor.
//!
//! Holds the audio-level normalization rules, the shared [`telemetry`] store
//! that the host event thread and the UI loop both touch, the error taxonomy,
//! and CLI settings.

pub mod error;
pub mod level;
pub mod settings;
pub mod telemetry;

pub use error::{MonitorError, Result};
