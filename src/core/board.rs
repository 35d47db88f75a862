//! Board module - manages the game grid
//!
//! The board is a square N×N torus: every cell is empty or holds an occupant,
//! and movement off one edge re-enters from the opposite edge. Storage is a
//! flat row-major vector sized once at construction (the dimension comes from
//! `GameConfig`, so it is not a compile-time constant).
//! Coordinates: (row, col) with row 0 at the top, col 0 at the left.

use crate::types::{Cell, Occupant, Pos, BOARD_SIZE};

/// The game grid - an N×N torus using flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimension
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from an in-bounds position
    #[inline(always)]
    fn idx(&self, pos: Pos) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    /// Board dimension (the board is square)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at an in-bounds position
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.idx(pos)]
    }

    /// Set cell at an in-bounds position
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.idx(pos);
        self.cells[idx] = cell;
    }

    /// Check whether a position holds nothing
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Apply a (row, col) offset with toroidal wraparound. The result is
    /// always in-bounds; offsets may be any magnitude.
    pub fn wrap(&self, pos: Pos, offset: (i8, i8)) -> Pos {
        let n = self.size as i64;
        let row = (pos.row as i64 + offset.0 as i64).rem_euclid(n) as usize;
        let col = (pos.col as i64 + offset.1 as i64).rem_euclid(n) as usize;
        Pos::new(row, col)
    }

    /// Number of cells currently holding a fly
    pub fn fly_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(Occupant::Fly))
            .count()
    }

    /// All positions in row-major order (the fly-step iteration order)
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Positions of all flies in row-major order
    pub fn fly_positions(&self) -> Vec<Pos> {
        self.positions()
            .filter(|&pos| self.get(pos) == Some(Occupant::Fly))
            .collect()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the cells into `out`, resizing it as needed
    pub(crate) fn write_cells(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(&self.cells);
    }

    /// Overwrite this board with another of the same dimension, reusing the
    /// existing storage
    pub(crate) fn copy_from(&mut self, other: &Board) {
        debug_assert_eq!(self.size, other.size);
        self.cells.copy_from_slice(&other.cells);
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}
