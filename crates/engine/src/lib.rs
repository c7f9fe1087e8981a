//! Scheduler: drives a game from a fixed clock and a command queue.
//!
//! The core engine never looks at time. This crate owns the two external
//! collaborators that feed it:
//!
//! - [`TickClock`]: a fixed-period clock that reports how many gravity ticks are due
//! - [`Session`]: one game plus a bounded single-consumer command queue
//!
//! Every engine operation runs to completion on the caller's thread, queued
//! commands first in arrival order, then due ticks. Once the game is over the
//! clock stops and further commands are refused.

pub mod clock;
pub mod session;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use clock::TickClock;
pub use session::{Session, COMMAND_QUEUE_CAPACITY};
