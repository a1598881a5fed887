//! Terminal 2048 runner (default binary).
//!
//! Reads key events with crossterm, feeds them to the board engine and
//! redraws through the framebuffer renderer after every event.

mod config;
mod logging;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

use config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let _log_guard = logging::init(&config)?;
    info!(seed = config.seed, "starting session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Turn-based: block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    break;
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }

    game.snapshot_into(&mut snap);
    info!(snapshot = %serde_json::to_string(&snap)?, "session ended");
    Ok(())
}
