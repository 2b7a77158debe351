//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the engine's closed [`crate::types::Command`]
//! set. The engine itself never sees a key code.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
