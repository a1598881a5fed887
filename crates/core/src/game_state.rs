//! Game state module - one 2048 session
//!
//! `GameState` owns the board, the score and the RNG for a single game. The
//! host drives it with [`GameState::apply_move`] (or [`GameState::apply_action`])
//! and reads it back through accessors or a [`GameSnapshot`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::board::Board;
use crate::engine::{self, evaluate_status, MoveOutcome};
use crate::snapshot::GameSnapshot;
use crate::spawn::initialize;
use crate::types::{Direction, GameAction, GameStatus, Tile};

/// Complete state of a game session
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    score: u32,
    /// Sticky: set the first time a 2048 tile appears.
    won: bool,
    /// Sticky: set once the board has no move left.
    over: bool,
    /// Committed moves in the current episode.
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: R,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Rng> GameState<R> {
    /// Start a game on a fresh board using the given RNG
    pub fn with_rng(mut rng: R) -> Self {
        let board = initialize(&mut rng);
        Self {
            board,
            score: 0,
            won: false,
            over: false,
            moves: 0,
            episode_id: 0,
            rng,
        }
    }

    /// Resume from an existing board with a zero score
    ///
    /// No tile is spawned; the status is evaluated from the board as given.
    pub fn from_board(board: Board, rng: R) -> Self {
        let status = evaluate_status(&board);
        Self {
            board,
            score: 0,
            won: status == GameStatus::Won,
            over: !engine::can_move(&board),
            moves: 0,
            episode_id: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Whether the board is stuck and moves are rejected
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    /// Current status; a reached 2048 keeps reporting `Won`
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.over {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Slide the tiles towards `direction`
    ///
    /// Rejected moves (nothing would change, or the game is over) leave the
    /// session untouched and report `changed == false`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.over {
            return self.rejected();
        }

        let outcome = engine::apply_move(&self.board, direction, &mut self.rng);
        if !outcome.changed {
            return self.rejected();
        }

        self.board = outcome.board;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves += 1;
        debug!(
            direction = direction.as_str(),
            score_delta = outcome.score_delta,
            score = self.score,
            "move committed"
        );

        if outcome.status == GameStatus::Won && !self.won {
            self.won = true;
            info!(score = self.score, moves = self.moves, "reached 2048");
        }
        if !engine::can_move(&self.board) {
            self.over = true;
            info!(
                score = self.score,
                moves = self.moves,
                best_tile = self.max_tile(),
                "no moves left"
            );
        }

        MoveOutcome {
            status: self.status(),
            ..outcome
        }
    }

    /// Apply a shell action; returns whether the session changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start over on a fresh board; the RNG stream continues
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        self.board = initialize(&mut self.rng);
        self.score = 0;
        self.won = false;
        self.over = false;
        self.moves = 0;
        self.episode_id = next_episode;
        info!(episode_id = self.episode_id, "game restarted");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.rows();
        out.score = self.score;
        out.status = self.status();
        out.game_over = self.over;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.best_tile = self.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn rejected(&self) -> MoveOutcome {
        MoveOutcome {
            board: self.board,
            score_delta: 0,
            changed: false,
            status: self.status(),
            spawned: None,
        }
    }
}
