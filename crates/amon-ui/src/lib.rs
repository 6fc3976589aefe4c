//! Terminal UI layer for the audio monitor.
//!
//! Provides themes, the shared screen layout, meter/button/list components,
//! the composed monitor view, and the fixed-rate application loop built on
//! top of [`ratatui`].

pub mod app;
pub mod components;
pub mod layout;
pub mod monitor_view;
pub mod themes;

pub use amon_core as core;
