//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into steering requests ([`crate::types::Direction`])
//! and quit requests, leaving reversal filtering and tick pacing to the
//! driver.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
