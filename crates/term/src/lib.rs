//! Terminal front-end for the game.
//!
//! A small, game-oriented rendering layer: views draw a core snapshot into a
//! framebuffer, and the renderer flushes framebuffers to the terminal.
//! The engine never depends on this crate.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
