//! Falling-blocks puzzle game (workspace facade crate).
//!
//! The implementation lives in the crates under `crates/`; this package
//! re-exports them as `falling_blocks::{types, core, engine, input, term}` and
//! owns the runtime [`config`].

pub mod config;

pub use falling_blocks_core as core;
pub use falling_blocks_engine as engine;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
