use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::term::game_view::AnchorY;
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::GameStatus;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn snapshot_with(board: [[u32; 4]; 4]) -> GameSnapshot {
    GameSnapshot {
        board,
        ..Default::default()
    }
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles of 7x3 plus border => 30x14, plus one banner row.
    assert_eq!(view.frame_size(), (30, 14));
    let fb = view.render(&snap, Viewport::new(30, 15));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(29, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_values() {
    let snap = snapshot_with([[2, 2048, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 15));

    // Tile (0,0): inner origin (1,1), middle row 2, one digit centered in 7 columns.
    assert_eq!(fb.get(4, 2).unwrap().ch, '2');
    // Tile (1,0): origin x = 8, four digits start at 8 + 1.
    let value: String = fb.row_text(2).chars().skip(9).take(4).collect();
    assert_eq!(value, "2048");
    // Empty tiles show a centered dot.
    assert_eq!(fb.get(1 + 2 * 7 + 3, 2).unwrap().ch, '·');
}

#[test]
fn term_view_colors_tiles_by_value() {
    let snap = snapshot_with([[2, 8, 16, 128], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 15));

    let bg_at = |tile_x: u16| fb.get(1 + tile_x * 7, 1).unwrap().style.bg;
    let empty_bg = fb.get(1, 4).unwrap().style.bg;
    let backgrounds = [bg_at(0), bg_at(1), bg_at(2), bg_at(3), empty_bg];
    for i in 0..backgrounds.len() {
        for j in i + 1..backgrounds.len() {
            assert_ne!(backgrounds[i], backgrounds[j], "bands {} and {}", i, j);
        }
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot_with([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 64]]);
    snap.score = 1234;
    snap.best_tile = 64;
    snap.moves = 17;

    let fb = GameView::default().render(&snap, Viewport::new(60, 15));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("MOVES"));
    assert!(all.contains("17"));

    // Too narrow: no panel.
    let fb = GameView::default().render(&snap, Viewport::new(34, 15));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_banners() {
    let mut snap = snapshot_with([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    snap.status = GameStatus::Won;
    let fb = GameView::default().render(&snap, Viewport::new(30, 15));
    assert!(fb.row_text(14).contains("YOU WIN!"));

    let mut snap = snapshot_with([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    snap.status = GameStatus::Lost;
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(30, 15));
    assert!(fb.row_text(14).contains("GAME OVER"));

    let snap = GameState::new(3).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 15));
    assert_eq!(fb.row_text(14).trim(), "");
}

#[test]
fn term_view_marks_won_game_that_ran_out_of_moves() {
    let mut snap = snapshot_with([[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    snap.status = GameStatus::Won;
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(30, 15));
    assert_eq!(fb.row_text(14).trim(), "YOU WIN! - GAME OVER");
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // Frame plus banner is 15 rows: start_y = (25 - 15) / 2 = 5.
    let fb = view.render(&snap, Viewport::new(30, 25));
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(30, 25));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}
