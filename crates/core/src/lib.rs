//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the board, the line merge, tile
//! spawning, directional moves and win/loss detection. It has **no
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the only randomness is an injected `rand::Rng`, so the
//!   same seed produces the same game
//! - **Testable**: every rule is a plain function over a [`Board`]
//! - **Portable**: runs in a terminal, a GUI, or headless
//! - **Allocation-free**: moves and spawns work on stack arrays
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid storage, rotation and neighbour queries
//! - [`line`]: slide-and-merge of a single line towards index 0
//! - [`spawn`]: random 2/4 tile placement and board initialization
//! - [`engine`]: rotate-merge-rotate directional moves and status evaluation
//! - [`game_state`]: a session owning board, score, flags and RNG
//! - [`snapshot`]: read-only copy of a session for renderers and logs
//!
//! # Game Rules
//!
//! - A move slides every tile towards one edge; equal neighbours merge once,
//!   scoring the merged value
//! - A move that changes nothing is rejected and spawns nothing
//! - Every accepted move spawns a 2 (90%) or a 4 (10%) on a random empty cell
//! - Reaching 2048 wins, but play may continue
//! - A full board with no equal neighbours ends the game
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let mut game = GameState::from_board(board, StdRng::seed_from_u64(12345));
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(outcome.score_delta, 4);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod engine;
pub mod game_state;
pub mod line;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{apply_move, evaluate_status, slide, MoveOutcome, Slide};
pub use game_state::GameState;
pub use line::{merge_line, LineMerge};
pub use snapshot::GameSnapshot;
pub use spawn::{initialize, spawn_tile, SpawnedTile};
