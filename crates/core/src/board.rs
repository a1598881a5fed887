//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is either empty (`0`) or holds a
//! power-of-two tile. Uses a flat array for zero-allocation copies.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Line, Tile, BOARD_CELLS, BOARD_SIZE, MAX_TILE};

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Tile; BOARD_CELLS],
}

impl Board {
    /// A board with every cell empty
    pub const EMPTY: Board = Board {
        cells: [0; BOARD_CELLS],
    };

    /// Create a new empty board
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a board from rows (top to bottom)
    pub fn from_rows(rows: [Line; BOARD_SIZE]) -> Self {
        let mut cells = [0; BOARD_CELLS];
        for (y, row) in rows.iter().enumerate() {
            cells[y * BOARD_SIZE..(y + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: usize, y: usize) -> Option<usize> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(y * BOARD_SIZE + x)
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(0))
    }

    /// Copy out row `y` (left to right)
    pub fn row(&self, y: usize) -> Line {
        let mut line = [0; BOARD_SIZE];
        line.copy_from_slice(&self.cells[y * BOARD_SIZE..(y + 1) * BOARD_SIZE]);
        line
    }

    /// Overwrite row `y` (left to right)
    pub fn set_row(&mut self, y: usize, line: Line) {
        self.cells[y * BOARD_SIZE..(y + 1) * BOARD_SIZE].copy_from_slice(&line);
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> [Line; BOARD_SIZE] {
        std::array::from_fn(|y| self.row(y))
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == 0)
            .map(|(idx, _)| (idx % BOARD_SIZE, idx / BOARD_SIZE))
            .collect()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == 0).count()
    }

    /// Number of occupied cells
    pub fn count_tiles(&self) -> usize {
        BOARD_CELLS - self.count_empty()
    }

    /// Whether any cell holds `tile`
    pub fn contains(&self, tile: Tile) -> bool {
        self.cells.contains(&tile)
    }

    /// Largest tile on the board (0 if empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&t| u64::from(t)).sum()
    }

    /// Check if any horizontally or vertically adjacent pair of tiles is equal
    /// and can still merge
    ///
    /// Empty cells are not considered a pair.
    pub fn has_adjacent_pair(&self) -> bool {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let tile = self.cells[y * BOARD_SIZE + x];
                if tile == 0 || tile >= MAX_TILE {
                    continue;
                }
                if x + 1 < BOARD_SIZE && self.cells[y * BOARD_SIZE + x + 1] == tile {
                    return true;
                }
                if y + 1 < BOARD_SIZE && self.cells[(y + 1) * BOARD_SIZE + x] == tile {
                    return true;
                }
            }
        }
        false
    }

    /// Rotate the board 90° clockwise
    ///
    /// The left column (read bottom to top) becomes the top row.
    pub fn rotate_cw(&self) -> Self {
        let mut out = Self::EMPTY;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                out.cells[x * BOARD_SIZE + (BOARD_SIZE - 1 - y)] = self.cells[y * BOARD_SIZE + x];
            }
        }
        out
    }

    /// Rotate the board clockwise `turns` times (taken modulo 4)
    pub fn rotated(&self, turns: u8) -> Self {
        let mut out = *self;
        for _ in 0..turns % 4 {
            out = out.rotate_cw();
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; BOARD_CELLS];
    }
}
