//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget/layout
//! libraries and renders into a framebuffer that is flushed to the terminal
//! with crossterm.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure mapping from a `GameSnapshot` into a framebuffer
//! - [`renderer`]: raw-mode terminal session with diffed redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
