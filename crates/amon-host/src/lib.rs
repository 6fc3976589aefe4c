//! Host boundary for the audio monitor.
//!
//! Models the narrow slice of the voice-chat host the monitor consumes: a
//! synchronous level poll, recording start/stop commands, talk-status event
//! delivery with name resolution, and the [`sim`] stand-in used when no real
//! host is attached.

pub mod api;
pub mod error;
pub mod events;
pub mod sim;

pub use api::{ServerId, VoiceHost};
pub use error::HostError;
pub use events::{apply_talk_event, TalkEvent, TalkStatus};
