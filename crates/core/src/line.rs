//! Line merge - the single slide-and-merge routine every move reduces to
//!
//! A line is merged in its canonical orientation: tiles slide towards index 0.
//! Each tile merges at most once per move, and merges resolve from the leading
//! edge, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` rather than `[8, 0, 0, 0]`.
//! Tiles at [`MAX_TILE`] cannot double in a `u32` and never merge.

use arrayvec::ArrayVec;

use crate::types::{Line, BOARD_SIZE, MAX_TILE};

/// Result of merging one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMerge {
    /// The line after compaction and merging, padded with zeros
    pub line: Line,
    /// Sum of the values produced by merges in this line, saturating at `u32::MAX`
    pub score: u32,
    /// Whether `line` differs from the input (compaction alone counts)
    pub changed: bool,
}

/// Slide a line towards index 0, merging equal neighbours once
pub fn merge_line(input: Line) -> LineMerge {
    let compacted: ArrayVec<u32, BOARD_SIZE> = input.iter().copied().filter(|&t| t != 0).collect();

    let mut line = [0; BOARD_SIZE];
    let mut score = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < compacted.len() {
        let tile = compacted[read];
        if tile < MAX_TILE && read + 1 < compacted.len() && compacted[read + 1] == tile {
            let merged = tile * 2;
            line[write] = merged;
            score = score.saturating_add(merged);
            read += 2;
        } else {
            line[write] = tile;
            read += 1;
        }
        write += 1;
    }

    LineMerge {
        line,
        score,
        changed: line != input,
    }
}
