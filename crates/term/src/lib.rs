//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] of styled characters and
//! [`TerminalRenderer`] flushes only the changed runs to the terminal.
//! Board cells are drawn two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use neon_tetris_core as core;
pub use neon_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
