//! Board transitions - directional moves and terminal-state detection
//!
//! Every direction is handled by one routine: rotate the board clockwise
//! until the move points left, merge each row with [`merge_line`], then rotate
//! the rest of the way round. See [`Direction::quarter_turns`] for the mapping.

use rand::Rng;

use crate::board::Board;
use crate::line::merge_line;
use crate::spawn::{spawn_tile, SpawnedTile};
use crate::types::{Direction, GameStatus, BOARD_SIZE, WIN_TILE};

/// Deterministic half of a move: the board after sliding, before any spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub board: Board,
    pub score_delta: u32,
    pub changed: bool,
}

/// Full result of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after the move and its spawn (the input board when rejected)
    pub board: Board,
    /// Points scored by merges in this move
    pub score_delta: u32,
    /// Whether any tile moved or merged
    pub changed: bool,
    /// Status of `board`
    pub status: GameStatus,
    /// Tile placed after a committed move
    pub spawned: Option<SpawnedTile>,
}

/// Slide every tile towards `direction` without spawning
pub fn slide(board: &Board, direction: Direction) -> Slide {
    let turns = direction.quarter_turns();
    let mut canonical = board.rotated(turns);

    let mut score_delta = 0u32;
    let mut changed = false;
    for y in 0..BOARD_SIZE {
        let merge = merge_line(canonical.row(y));
        if merge.changed {
            canonical.set_row(y, merge.line);
            changed = true;
        }
        score_delta = score_delta.saturating_add(merge.score);
    }

    Slide {
        board: canonical.rotated((4 - turns) % 4),
        score_delta,
        changed,
    }
}

/// Whether any direction would change the board
pub fn can_move(board: &Board) -> bool {
    board.count_empty() > 0 || board.has_adjacent_pair()
}

/// Classify a board: a 2048 tile wins, a stuck board loses
pub fn evaluate_status(board: &Board) -> GameStatus {
    if board.contains(WIN_TILE) {
        GameStatus::Won
    } else if !can_move(board) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

/// Apply one move: slide, then spawn a tile if anything changed
///
/// A move that changes nothing is rejected: the input board comes back with
/// no spawn and a zero score delta.
pub fn apply_move<R: Rng + ?Sized>(board: &Board, direction: Direction, rng: &mut R) -> MoveOutcome {
    let slide = slide(board, direction);
    if !slide.changed {
        return MoveOutcome {
            board: *board,
            score_delta: 0,
            changed: false,
            status: evaluate_status(board),
            spawned: None,
        };
    }

    let mut next = slide.board;
    let spawned = spawn_tile(&mut next, rng);
    MoveOutcome {
        board: next,
        score_delta: slide.score_delta,
        changed: true,
        status: evaluate_status(&next),
        spawned,
    }
}
