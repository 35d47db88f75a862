//! Game state module - manages the complete game state
//!
//! This module ties together the core components: board, random source, and
//! session counters. It handles frog movement, the per-turn fly step, win
//! detection, and the game lifecycle (construction, restart).

use std::time::Instant;

use thiserror::Error;

use crate::core::snapshot::GameSnapshot;
use crate::core::{Board, RandomSource, SimpleRng};
use crate::types::{Direction, GameAction, GameConfig, Occupant, Pos, FLY_OFFSETS};

/// Configuration rejected at construction time.
///
/// These are the only fallible conditions in the engine; once construction
/// succeeds, every operation is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size must be non-zero")]
    EmptyBoard,
    #[error("cannot place {fly_count} flies on a {board_size}x{board_size} board")]
    TooManyFlies { board_size: usize, fly_count: usize },
}

/// Complete game state.
///
/// Owns the board, the frog position, the session counters, and the random
/// source. Generic over [`RandomSource`] so tests can script every draw;
/// production code uses the `SimpleRng` default.
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    config: GameConfig,
    board: Board,
    /// Next-board written by the fly step, kept between moves so stepping
    /// does not allocate.
    scratch: Board,
    frog: Pos,
    total_moves: u32,
    flies_eaten: u32,
    started_at: Instant,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, GameError> {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing all randomness from `rng`.
    ///
    /// Validates the configuration before touching the random source: a fly
    /// count that cannot fit on the board would spin forever under rejection
    /// sampling.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        if config.board_size == 0 {
            return Err(GameError::EmptyBoard);
        }
        // A size whose square overflows usize cannot be allocated, so any
        // fly count is too many for it.
        let capacity = config.board_size.checked_mul(config.board_size);
        if capacity.map_or(true, |cells| config.fly_count >= cells) {
            return Err(GameError::TooManyFlies {
                board_size: config.board_size,
                fly_count: config.fly_count,
            });
        }

        let mut state = Self {
            config,
            board: Board::new(config.board_size),
            scratch: Board::new(config.board_size),
            frog: Pos::new(0, 0),
            total_moves: 0,
            flies_eaten: 0,
            started_at: Instant::now(),
            game_over: false,
            episode_id: 0,
            rng,
        };
        state.populate();
        Ok(state)
    }

    /// Place the frog at the origin and scatter the configured number of
    /// flies over distinct empty cells.
    ///
    /// Rejection sampling: one draw per coordinate (row, then column), redraw
    /// on any collision. Terminates because construction guaranteed the flies
    /// fit beside the frog.
    fn populate(&mut self) {
        self.board.clear();
        self.frog = Pos::new(0, 0);
        self.board.set(self.frog, Some(Occupant::Frog));

        let size = self.config.board_size as u32;
        let mut placed = 0;
        while placed < self.config.fly_count {
            let row = self.rng.next_range(size) as usize;
            let col = self.rng.next_range(size) as usize;
            let pos = Pos::new(row, col);
            if self.board.is_empty(pos) {
                self.board.set(pos, Some(Occupant::Fly));
                placed += 1;
            }
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn frog(&self) -> Pos {
        self.frog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    pub fn flies_eaten(&self) -> u32 {
        self.flies_eaten
    }

    /// Flies still on the board. Counted from the grid, so tests can check
    /// it against `fly_count - flies_eaten`.
    pub fn flies_remaining(&self) -> u32 {
        self.board.fly_count() as u32
    }

    /// Whole seconds since the session started, recomputed on demand.
    pub fn elapsed_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// True iff no cell holds a fly. Pure query; the `game_over` flag latches
    /// only after a move observes this.
    pub fn is_complete(&self) -> bool {
        self.board.fly_count() == 0
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Move the frog one cell, wrapping at the board edges.
    ///
    /// Eats any fly on the target cell, then gives every fly one random step,
    /// then latches `game_over` once the board is clear. Returns `false`
    /// (touching nothing) while the game is over; only [`reset`](Self::reset)
    /// leaves that state.
    pub fn move_frog(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let target = self.board.wrap(self.frog, direction.delta());
        if self.board.get(target) == Some(Occupant::Fly) {
            self.flies_eaten += 1;
        }
        self.board.set(self.frog, None);
        self.board.set(target, Some(Occupant::Frog));
        self.frog = target;
        self.total_moves += 1;

        self.step_flies();

        if self.is_complete() {
            self.game_over = true;
        }
        true
    }

    /// Give every fly one step in a uniformly random direction (orthogonal or
    /// diagonal), wrapping at the edges.
    ///
    /// Flies are scanned in row-major order over the board as it stood at the
    /// start of the step, and moves land in a next-board that starts as a
    /// copy: a fly moves only if its chosen destination is empty in that
    /// next-board, otherwise it stays put. Two flies picking the same cell
    /// resolve first-writer-wins in scan order, and a cell vacated earlier in
    /// the same step can be reoccupied. The frog's cell is never empty, so
    /// flies never step onto it.
    fn step_flies(&mut self) {
        self.scratch.copy_from(&self.board);

        let size = self.config.board_size;
        for row in 0..size {
            for col in 0..size {
                let src = Pos::new(row, col);
                if self.board.get(src) != Some(Occupant::Fly) {
                    continue;
                }
                let draw = self.rng.next_range(FLY_OFFSETS.len() as u32);
                let dest = self.board.wrap(src, FLY_OFFSETS[draw as usize]);
                if self.scratch.is_empty(dest) {
                    self.scratch.set(dest, Some(Occupant::Fly));
                    self.scratch.set(src, None);
                }
            }
        }

        std::mem::swap(&mut self.board, &mut self.scratch);
    }

    /// Restart the session: fresh board, fresh counters, fresh timestamp.
    ///
    /// The random source keeps its current state, so a restarted game draws a
    /// new fly layout. Infallible: the configuration was validated at
    /// construction. Bumps `episode_id` so observers can tell sessions apart.
    pub fn reset(&mut self) {
        self.total_moves = 0;
        self.flies_eaten = 0;
        self.game_over = false;
        self.started_at = Instant::now();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.populate();
    }

    /// Apply a game action, reporting whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.move_frog(direction),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board_size = self.config.board_size;
        self.board.write_cells(&mut out.cells);
        out.frog = self.frog;
        out.total_moves = self.total_moves;
        out.flies_eaten = self.flies_eaten;
        out.flies_remaining = self.flies_remaining();
        out.elapsed_secs = self.elapsed_secs();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1).expect("default configuration is valid")
    }
}
