//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimension (the board is square)
pub const BOARD_SIZE: usize = 10;

/// Default number of flies placed at the start of a session
pub const FLY_COUNT: usize = 5;

/// Input poll timeout (milliseconds); also the idle redraw cadence that
/// keeps the elapsed-time display ticking between key presses
pub const FRAME_MS: u64 = 250;

/// Something occupying a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Frog,
    Fly,
}

/// Cell on the board (None = empty, Some = occupied)
pub type Cell = Option<Occupant>;

/// Board coordinate: row 0 is the top, column 0 is the left,
/// both always in `[0, board_size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

/// Frog movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, for iteration in tests and benches
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit (row, col) offset; rows grow downward
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// The eight (row, col) offsets a fly may take in one step, in draw order:
/// up, down, left, right, up-right, up-left, down-right, down-left.
/// A fly step draws one uniform index into this table per fly, so scripted
/// random sources reproduce exact motion.
pub const FLY_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

/// Game actions produced by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
}

/// Tunable session parameters. Both values are design constants in the
/// shipped game; tests use other shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fly_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            fly_count: FLY_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_units() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1, "{:?} is not a unit offset", dir);
        }
    }

    #[test]
    fn test_fly_offsets_cover_all_neighbors() {
        // 8 distinct non-zero offsets, each component in -1..=1
        for (i, &(dr, dc)) in FLY_OFFSETS.iter().enumerate() {
            assert!((dr, dc) != (0, 0), "offset {} is zero", i);
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            for &other in &FLY_OFFSETS[..i] {
                assert_ne!((dr, dc), other, "duplicate offset at {}", i);
            }
        }
        // the four orthogonal offsets come first and match Direction deltas
        assert_eq!(FLY_OFFSETS[0], Direction::Up.delta());
        assert_eq!(FLY_OFFSETS[1], Direction::Down.delta());
        assert_eq!(FLY_OFFSETS[2], Direction::Left.delta());
        assert_eq!(FLY_OFFSETS[3], Direction::Right.delta());
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.fly_count, 5);
    }
}
