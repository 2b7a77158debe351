//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input mapping, terminal front-end and shared types
//! as `blockfall::{core,input,term,types}`. The implementation lives in the
//! dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
