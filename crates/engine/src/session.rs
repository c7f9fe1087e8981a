//! One running game fed by a clock and a command queue.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::clock::TickClock;
use crate::core::{GameSnapshot, GameState, RandomSource, SimpleRng, TickOutcome};
use crate::types::GameCommand;

/// Commands buffered between two `advance` calls
pub const COMMAND_QUEUE_CAPACITY: usize = 32;

/// Owns a [`GameState`] and serialises every operation on it.
#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    game: GameState<R>,
    clock: TickClock,
    queue: ArrayVec<GameCommand, COMMAND_QUEUE_CAPACITY>,
}

impl<R: RandomSource> Session<R> {
    pub fn new(game: GameState<R>, tick_interval: Duration, now: Instant) -> Self {
        let mut clock = TickClock::new(tick_interval, now);
        if game.is_game_over() {
            clock.stop();
        }
        Self {
            game,
            clock,
            queue: ArrayVec::new(),
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// Game over and the clock stopped
    pub fn is_finished(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue a command for the next `advance`.
    ///
    /// Refused (returns false) once the game is over or when the queue is full.
    pub fn submit(&mut self, command: GameCommand) -> bool {
        if self.game.is_game_over() {
            return false;
        }
        if self.queue.try_push(command).is_err() {
            log::warn!("command queue full, dropping {}", command.as_str());
            return false;
        }
        true
    }

    /// Run queued commands in arrival order, then every tick due at `now`.
    ///
    /// Returns true if the game state changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for command in self.queue.drain(..) {
            changed |= self.game.handle_input(command);
        }

        if !self.game.is_game_over() {
            for _ in 0..self.clock.due_ticks(now) {
                let outcome = self.game.tick();
                changed |= outcome != TickOutcome::Idle;
                if self.game.is_game_over() {
                    break;
                }
            }
        }

        if self.game.is_game_over() && !self.clock.is_stopped() {
            self.clock.stop();
            log::info!("clock stopped, final score {}", self.game.score());
        }

        changed
    }

    /// Time until the next tick is due, `None` when finished
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.time_until_next(now)
    }

    /// Throw away the current game and start a new one.
    pub fn restart(&mut self, now: Instant) {
        self.queue.clear();
        self.game.reset();
        self.clock.restart(now);
        if self.game.is_game_over() {
            self.clock.stop();
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, FixedSequence};
    use crate::types::{Color, BOARD_COLS, BOARD_ROWS};

    const TICK: Duration = Duration::from_millis(500);

    fn o_session(t0: Instant) -> Session<FixedSequence> {
        let game = GameState::with_source(BOARD_ROWS, BOARD_COLS, FixedSequence::new(vec![1]));
        Session::new(game, TICK, t0)
    }

    #[test]
    fn test_commands_apply_in_order() {
        let t0 = Instant::now();
        let mut session = o_session(t0);

        assert!(session.submit(GameCommand::MoveLeft));
        assert!(session.submit(GameCommand::MoveLeft));
        assert!(session.submit(GameCommand::MoveRight));
        assert_eq!(session.pending(), 3);

        assert!(session.advance(t0));
        assert_eq!(session.pending(), 0);
        assert_eq!(session.game().active().x, 3);
        assert_eq!(session.game().active().y, 0);
    }

    #[test]
    fn test_ticks_follow_clock() {
        let t0 = Instant::now();
        let mut session = o_session(t0);

        assert!(!session.advance(t0 + Duration::from_millis(100)));
        assert!(session.advance(t0 + TICK));
        assert_eq!(session.game().active().y, 1);
        assert!(session.advance(t0 + TICK * 3));
        assert_eq!(session.game().active().y, 3);
    }

    #[test]
    fn test_queue_is_bounded() {
        let t0 = Instant::now();
        let mut session = o_session(t0);
        for _ in 0..COMMAND_QUEUE_CAPACITY {
            assert!(session.submit(GameCommand::RotateCw));
        }
        assert!(!session.submit(GameCommand::RotateCw));
    }

    #[test]
    fn test_game_over_stops_clock_and_input() {
        let t0 = Instant::now();
        let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
        board.set(2, 4, Color::Red).unwrap();
        let game = GameState::from_parts(board, FixedSequence::new(vec![1]));
        let mut session = Session::new(game, TICK, t0);

        assert!(session.advance(t0 + TICK));
        assert!(session.is_finished());
        assert!(session.clock().is_stopped());
        assert_eq!(session.time_until_next_tick(t0 + TICK), None);

        assert!(!session.submit(GameCommand::MoveLeft));
        assert!(!session.advance(t0 + TICK * 10));
    }

    #[test]
    fn test_restart_after_game_over() {
        let t0 = Instant::now();
        let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
        board.set(2, 4, Color::Red).unwrap();
        let game = GameState::from_parts(board, FixedSequence::new(vec![1]));
        let mut session = Session::new(game, TICK, t0);
        session.advance(t0 + TICK);
        assert!(session.is_finished());

        let t1 = t0 + Duration::from_secs(3);
        session.restart(t1);
        assert!(!session.is_finished());
        assert!(!session.clock().is_stopped());
        assert!(session.submit(GameCommand::SoftDrop));
        assert!(session.advance(t1));
        assert_eq!(session.game().active().y, 1);
    }

    #[test]
    fn test_snapshot_reflects_game() {
        let t0 = Instant::now();
        let mut session = o_session(t0);
        session.advance(t0 + TICK);

        let mut snap = GameSnapshot::default();
        session.snapshot_into(&mut snap);
        assert_eq!(snap.active.y, 1);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }
}
