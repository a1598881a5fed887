//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The classic 2048 playfield is a fixed 4x4 grid:
//!
//! - **Width**: 4 columns (indexed 0-3)
//! - **Height**: 4 rows (indexed 0-3)
//! - **Empty cell**: value `0`
//!
//! # Tile Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_TILE` | 2048 | Reaching this tile marks the game as won |
//! | `MAX_TILE` | 2^31 | Largest `u32` tile; never merges further |
//! | `SPAWN_TWO` | 2 | Common spawn value |
//! | `SPAWN_FOUR` | 4 | Rare spawn value |
//! | `SPAWN_FOUR_PROBABILITY` | 0.1 | Chance a spawned tile is a 4 |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameStatus, BOARD_SIZE};
//!
//! // Directions map onto clockwise quarter turns of the board
//! assert_eq!(Direction::Left.quarter_turns(), 0);
//! assert_eq!(Direction::Up.quarter_turns(), 3);
//!
//! assert_eq!(GameStatus::default(), GameStatus::InProgress);
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Board width and height in cells (4x4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: Tile = 2048;

/// Largest tile a board can hold; two of these never merge
pub const MAX_TILE: Tile = 1 << 31;

/// Value of a regular spawned tile
pub const SPAWN_TWO: Tile = 2;

/// Value of a rare spawned tile
pub const SPAWN_FOUR: Tile = 4;

/// Probability that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Number of tiles placed when a game starts
pub const INITIAL_TILES: usize = 2;

/// A cell value on the board
///
/// - `0`: Empty cell
/// - any other value: a tile, always a power of two
pub type Tile = u32;

/// One row or column of the board
pub type Line = [Tile; BOARD_SIZE];

/// Direction a move slides the tiles towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the shell lists them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Number of clockwise quarter turns that turn this move into a left move
    ///
    /// Rotating the board clockwise `k` times, merging every row leftward and
    /// then rotating `(4 - k) % 4` more times yields the move in this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.quarter_turns(), 0);
    /// assert_eq!(Direction::Down.quarter_turns(), 1);
    /// assert_eq!(Direction::Right.quarter_turns(), 2);
    /// assert_eq!(Direction::Up.quarter_turns(), 3);
    /// ```
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Status of a game session
///
/// - **InProgress**: moves are accepted
/// - **Won**: a 2048 tile was reached; play may continue
/// - **Lost**: the board is full and no two neighbours are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Actions the shell can apply to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile towards a direction
    Move(Direction),
    /// Start a fresh game
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_constants() {
        assert_eq!(BOARD_CELLS, 16);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(SPAWN_TWO, 2);
        assert_eq!(SPAWN_FOUR, 4);
        assert_eq!(INITIAL_TILES, 2);
    }

    #[test]
    fn quarter_turns_are_distinct() {
        let mut turns: Vec<u8> = Direction::ALL.iter().map(|d| d.quarter_turns()).collect();
        turns.sort_unstable();
        assert_eq!(turns, vec![0, 1, 2, 3]);
    }

    #[test]
    fn direction_names_are_distinct() {
        let mut names: Vec<&str> = Direction::ALL.iter().map(|d| d.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["down", "left", "right", "up"]);
    }

    #[test]
    fn tile_bound_is_a_power_of_two() {
        assert!(MAX_TILE.is_power_of_two());
        assert!(MAX_TILE.checked_mul(2).is_none());
    }
}
