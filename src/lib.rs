//! Neon Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `neon_tetris::{core,input,term,types}` and
//! holds the runner configuration.

pub mod config;

pub use neon_tetris_core as core;
pub use neon_tetris_input as input;
pub use neon_tetris_term as term;
pub use neon_tetris_types as types;

pub use config::RunConfig;
