//! Game state module - the engine
//!
//! Ties the board, the active piece, the shape catalog and the random source
//! together. Every mutation is gated by [`is_valid_move`]: a rejected move is a
//! silent no-op. A piece that cannot fall is placed, full lines are cleared and
//! scored, and the next piece is spawned. Game over is terminal; afterwards
//! every command and tick is ignored until [`GameState::reset`].

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::line_clear_score;
use crate::shapes::CATALOG;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameCommand, ShapeKind, BOARD_COLS, BOARD_ROWS, SHAPE_COUNT};
use crate::validity::is_valid_move;

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    /// Terminal; only `reset` leaves this state
    GameOver,
}

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game is over; nothing happened
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece could not fall and was placed
    Locked { lines_cleared: u32 },
}

/// Emitted after each placement (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: ShapeKind,
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Piece,
    source: R,
    status: GameStatus,
    score: u32,
    lines: u32,
    pieces_placed: u32,
    /// Increments on every reset.
    game_id: u32,
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a 20x10 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_size(BOARD_ROWS, BOARD_COLS, seed)
    }

    /// Create a game of the given size with the given RNG seed
    pub fn with_size(rows: usize, cols: usize, seed: u32) -> Self {
        Self::with_source(rows, cols, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game on an empty board, drawing shapes from `source`
    pub fn with_source(rows: usize, cols: usize, source: R) -> Self {
        Self::from_parts(Board::new(rows, cols), source)
    }

    /// Start a game on an existing board.
    ///
    /// The first piece is spawned immediately; if it does not fit, the game
    /// is over from the start.
    pub fn from_parts(board: Board, mut source: R) -> Self {
        let active = draw_piece(&mut source, board.cols());
        let status = if is_valid_move(&active, &board) {
            GameStatus::Running
        } else {
            GameStatus::GameOver
        };

        log::info!(
            "new game on {}x{} board, first piece {}",
            board.rows(),
            board.cols(),
            active.kind.as_str()
        );

        Self {
            board,
            active,
            source,
            status,
            score: 0,
            lines: 0,
            pieces_placed: 0,
            game_id: 0,
            last_event: None,
        }
    }

    /// Start a new game on an empty board of the same size.
    ///
    /// The random source is kept, so the shape sequence continues.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_placed = 0;
        self.last_event = None;
        self.game_id = self.game_id.wrapping_add(1);
        self.status = GameStatus::Running;
        self.spawn_piece();
        log::info!("game {} started", self.game_id);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Take and clear the last placement event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_placed = self.pieces_placed;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player command.
    ///
    /// Returns true if the state changed. Rejected moves and any command
    /// after game over return false.
    pub fn handle_input(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::RotateCw => self.rotate(),
            GameCommand::SoftDrop => self.soft_drop() != TickOutcome::Idle,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate the active piece a quarter turn at the same anchor
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let rotated = self.active.rotated();
        if !is_valid_move(&rotated, &self.board) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Player-requested gravity step; identical to a tick
    pub fn soft_drop(&mut self) -> TickOutcome {
        self.tick()
    }

    /// Advance one gravity step
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }

        let fallen = self.active.shifted(0, 1);
        if is_valid_move(&fallen, &self.board) {
            self.active = fallen;
            return TickOutcome::Fell;
        }

        let lines_cleared = self.lock_piece();
        TickOutcome::Locked { lines_cleared }
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        if self.is_game_over() {
            return false;
        }

        let shifted = self.active.shifted(dx, 0);
        if !is_valid_move(&shifted, &self.board) {
            return false;
        }
        self.active = shifted;
        true
    }

    /// Copy the active piece into the board, clear lines, spawn the next piece.
    /// Returns the number of lines cleared.
    fn lock_piece(&mut self) -> u32 {
        let piece = self.active;

        for (x, y) in piece.cells() {
            // The active piece only ever holds validated positions at y >= 0.
            if let Err(err) = self.board.set(y as usize, x as usize, piece.color) {
                unreachable!("placing {:?} at ({}, {}): {}", piece.kind, piece.x, piece.y, err);
            }
        }

        let lines_cleared = self.board.clear_full_rows();
        let score_gained = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(score_gained);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.pieces_placed = self.pieces_placed.wrapping_add(1);

        log::debug!(
            "placed {} at ({}, {}), cleared {} line(s)",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            lines_cleared
        );

        // Frozen without descending from the top row.
        if piece.y <= 0 {
            self.status = GameStatus::GameOver;
        }

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared,
            score_gained,
            game_over: self.is_game_over(),
        });

        if self.is_game_over() {
            log::info!(
                "game {} over: score {}, lines {}, pieces {}",
                self.game_id,
                self.score,
                self.lines,
                self.pieces_placed
            );
        }

        lines_cleared
    }

    /// Replace the active piece with a fresh random one at the spawn position.
    /// A spawn that does not fit ends the game.
    fn spawn_piece(&mut self) {
        self.active = draw_piece(&mut self.source, self.board.cols());
        if !is_valid_move(&self.active, &self.board) {
            self.status = GameStatus::GameOver;
        }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

fn draw_piece<R: RandomSource>(source: &mut R, cols: usize) -> Piece {
    let idx = source.next_range(SHAPE_COUNT as u32) as usize;
    Piece::spawn(CATALOG[idx].kind, cols)
}
