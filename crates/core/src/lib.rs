//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It has no dependency
//! on terminals, clocks or threads: the caller feeds elapsed time into
//! [`Game::tick`] and player intent through [`Game::apply_action`], then
//! reads a [`GameSnapshot`] to draw a frame.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 color grid with collision checks and line clearing
//! - [`pieces`]: shape catalog, neon colors, matrix rotation and wall kicks
//! - [`piece`]: a placed tetromino (kind, shape, anchor)
//! - [`rng`]: seeded LCG and the uniform piece randomizer
//! - [`scoring`]: line clear points, perfect clears, leveling
//! - [`speed`]: level to drop interval curve
//! - [`game`]: the game state machine
//! - [`snapshot`]: copyable render view of a game
//!
//! # Example
//!
//! ```
//! use neon_tetris_core::Game;
//! use neon_tetris_types::GameAction;
//! use std::time::Duration;
//!
//! let mut game = Game::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Gravity is driven by the caller
//! game.tick(Duration::from_millis(16));
//!
//! let snap = game.snapshot();
//! assert!(!snap.game_over);
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod speed;

pub use neon_tetris_types as types;

pub use board::Board;
pub use game::Game;
pub use piece::Piece;
pub use pieces::{catalog_shape, piece_color, try_rotate, ShapeMatrix};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{calculate_level, calculate_score, ScoreResult};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use speed::{drop_interval, drop_interval_ms};
