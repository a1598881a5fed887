//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, BOARD_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for a centered 4-digit value with padding.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HINT: CellStyle = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered grid, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_SIZE as u16 * self.cell_w + 2,
            BOARD_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        // One extra row below the frame for the status banner.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, x as u16, y as u16, tile);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        let banner = if snap.won() && snap.game_over {
            Some("YOU WIN! - GAME OVER")
        } else if snap.won() {
            Some("YOU WIN!")
        } else if snap.game_over {
            Some("GAME OVER")
        } else {
            None
        };
        if let Some(text) = banner {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, start_y.saturating_add(frame_h), text, BANNER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, tile: Tile) {
        let style = tile_style(tile);
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mid_y = py + self.cell_h / 2;
        if tile == 0 {
            fb.put_char(px + self.cell_w / 2, mid_y, '·', style);
            return;
        }
        let digits = digit_count(tile);
        let tx = px + self.cell_w.saturating_sub(digits) / 2;
        fb.put_u32(tx, mid_y, tile, style.bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("BEST", snap.best_tile),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        for hint in ["arrows move", "r restart", "q quit"] {
            fb.put_str(panel_x, y, hint, HINT);
            y = y.saturating_add(1);
        }
    }
}

/// Color band for a tile value.
pub fn tile_style(tile: Tile) -> CellStyle {
    let (fg, bg) = match tile {
        0 => (Rgb::new(107, 114, 128), Rgb::new(229, 231, 235)),
        1..=4 => (Rgb::new(133, 77, 14), Rgb::new(254, 240, 138)),
        5..=8 => (Rgb::new(154, 52, 18), Rgb::new(254, 215, 170)),
        9..=16 => (Rgb::new(153, 27, 27), Rgb::new(254, 202, 202)),
        _ => (Rgb::new(107, 33, 168), Rgb::new(233, 213, 255)),
    };
    CellStyle::new(fg, bg)
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(8), 1);
        assert_eq!(digit_count(16), 2);
        assert_eq!(digit_count(2048), 4);
        assert_eq!(digit_count(131072), 6);
    }

    #[test]
    fn tile_bands_follow_value() {
        assert_eq!(tile_style(2), tile_style(4));
        assert_ne!(tile_style(4), tile_style(8));
        assert_ne!(tile_style(8), tile_style(16));
        assert_eq!(tile_style(32), tile_style(2048));
        assert_ne!(tile_style(0), tile_style(2));
    }
}
