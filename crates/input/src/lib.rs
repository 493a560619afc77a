//! Terminal input: key mapping and held-key repeat.
//!
//! Independent of any rendering code. [`map`] turns `crossterm` key events
//! into [`crate::types::GameAction`]s and [`handler`] adds timed repeats for
//! held movement keys, including on terminals that never report key release.

pub mod handler;
pub mod map;

pub use neon_tetris_types as types;

pub use handler::{InputHandler, RepeatTiming};
pub use map::{handle_key_event, should_quit};
