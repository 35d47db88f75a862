use crate::types::{Cell, Pos, BOARD_SIZE};

/// Read-only copy of everything a renderer needs for one frame.
///
/// Plain data, no references into the engine. Refilled in place via
/// `GameState::snapshot_into` so the cell buffer allocates once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board_size: usize,
    /// Row-major, `board_size * board_size` entries.
    pub cells: Vec<Cell>,
    pub frog: Pos,
    pub total_moves: u32,
    pub flies_eaten: u32,
    pub flies_remaining: u32,
    pub elapsed_secs: u64,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.board_size + col]
    }

    pub fn clear(&mut self) {
        self.board_size = 0;
        self.cells.clear();
        self.frog = Pos::new(0, 0);
        self.total_moves = 0;
        self.flies_eaten = 0;
        self.flies_remaining = 0;
        self.elapsed_secs = 0;
        self.game_over = false;
        self.episode_id = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board_size: 0,
            cells: Vec::with_capacity(BOARD_SIZE * BOARD_SIZE),
            frog: Pos::new(0, 0),
            total_moves: 0,
            flies_eaten: 0,
            flies_remaining: 0,
            elapsed_secs: 0,
            game_over: false,
            episode_id: 0,
        }
    }
}
