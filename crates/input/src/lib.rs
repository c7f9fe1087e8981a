//! Terminal input adapter.
//!
//! Translates `crossterm` key events into [`crate::types::GameCommand`]s. The
//! four arrow keys map one-to-one onto the four engine commands; every other
//! key is ignored by the engine. Quit and restart are runner-level keys and
//! never reach the engine.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{is_restart, map_key, should_quit};
