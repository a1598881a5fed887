//! Tile spawning - the only randomized operation in the engine
//!
//! A spawn picks one empty cell uniformly at random and fills it with a 2
//! (90%) or a 4 (10%). Callers inject the RNG, so a seeded `StdRng` gives a
//! reproducible game.

use rand::Rng;

use crate::board::Board;
use crate::types::{Tile, INITIAL_TILES, SPAWN_FOUR, SPAWN_FOUR_PROBABILITY, SPAWN_TWO};

/// A tile placed by [`spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub x: usize,
    pub y: usize,
    pub value: Tile,
}

/// Draw a spawn value: 2 with probability 0.9, otherwise 4
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(SPAWN_FOUR_PROBABILITY) {
        SPAWN_FOUR
    } else {
        SPAWN_TWO
    }
}

/// Place a random tile on a random empty cell
///
/// Returns `None` and leaves the board untouched when it has no empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (x, y) = empty[rng.gen_range(0..empty.len())];
    let value = random_tile_value(rng);
    board.set(x, y, value);
    Some(SpawnedTile { x, y, value })
}

/// An empty board seeded with the opening tiles
pub fn initialize<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::new();
    for _ in 0..INITIAL_TILES {
        spawn_tile(&mut board, rng);
    }
    board
}
