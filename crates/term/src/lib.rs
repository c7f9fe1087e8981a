//! Terminal rendering for the falling-blocks game.
//!
//! Frames are drawn into a [`FrameBuffer`] by the pure [`GameView`], then
//! flushed by [`TerminalRenderer`], which only rewrites cells that changed.
//! Each board cell is two terminal columns wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
