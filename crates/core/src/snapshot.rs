use serde::Serialize;

use crate::types::{GameStatus, Line, Tile, BOARD_SIZE};

/// Read-only copy of a session, handed to renderers and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    pub board: [Line; BOARD_SIZE],
    pub score: u32,
    pub status: GameStatus,
    /// The board is stuck; set alongside `Won` when a won game runs out of moves.
    pub game_over: bool,
    pub moves: u32,
    pub episode_id: u32,
    pub best_tile: Tile,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_status_in_snake_case() {
        let snap = GameSnapshot {
            board: [[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]],
            score: 12,
            status: GameStatus::InProgress,
            best_tile: 4,
            ..Default::default()
        };
        let json = serde_json::to_value(snap).unwrap();
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["score"], 12);
        assert_eq!(json["board"][3][3], 4);
        assert_eq!(json["game_over"], false);
    }
}
