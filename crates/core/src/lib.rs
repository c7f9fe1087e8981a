//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and has **no dependency** on rendering,
//! input devices, or clocks:
//!
//! - **Deterministic**: shapes come from an injected [`RandomSource`]; the same
//!   seed replays the same game
//! - **Testable**: boards can be pre-filled and sequences fixed
//! - **Portable**: the scheduler and renderer only read snapshots
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of settled cells, row checks and line clears
//! - [`shapes`]: the seven-entry shape catalog and the rotation transform
//! - [`piece`]: the active falling piece
//! - [`validity`]: the collision/bounds check gating every move
//! - [`rng`]: seedable and fixed random sources
//! - [`scoring`]: flat per-line scoring
//! - [`game_state`]: the engine: spawn, move, rotate, gravity, placement, game over
//! - [`snapshot`]: one consistent read-only frame for renderers
//!
//! # Rules
//!
//! - A new piece spawns centered on the top row; if it does not fit, the game is over
//! - Left/right/rotate are applied only when the result is valid, otherwise ignored
//! - Each tick moves the piece down one row; when it cannot move it is placed
//! - Full rows are cleared bottom to top, 100 points each
//! - A piece placed without leaving the top row ends the game
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::GameState;
//! use falling_blocks_types::GameCommand;
//!
//! let mut game = GameState::new(12345);
//!
//! game.handle_input(GameCommand::MoveRight);
//! game.handle_input(GameCommand::RotateCw);
//! game.tick();
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod validity;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::{GameState, GameStatus, LockEvent, TickOutcome};
pub use piece::Piece;
pub use rng::{FixedSequence, RandomSource, SimpleRng};
pub use scoring::line_clear_score;
pub use shapes::{shape_def, ShapeDef, ShapeMatrix, CATALOG};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use validity::is_valid_move;
