//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! shared by the game core, the input layer and the terminal renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: (3, 0), the top-left corner of the shape matrix
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Target frame time of the runner |
//! | `FRAME_TIME_MS` | 16.67 | Simulation frame used by the speed curve |
//! | `KEY_REPEAT_DELAY_MS` | 400 | Hold time before a key starts repeating |
//! | `KEY_REPEAT_INTERVAL_MS` | 200 | Repeat interval while held |
//! | `KEY_REPEAT_FAST_INTERVAL_MS` | 50 | Repeat interval once held past the fast threshold |
//! | `KEY_FAST_THRESHOLD_MS` | 700 | Hold time after which repeats accelerate |
//!
//! # Examples
//!
//! ```
//! use neon_tetris_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the shape matrix's top-left corner when a piece spawns
pub const SPAWN_X: i8 = 3;

/// Row of the shape matrix's top-left corner when a piece spawns
pub const SPAWN_Y: i8 = 0;

/// Target frame time of the runner loop in milliseconds
pub const TICK_MS: u32 = 16;

/// Duration of one simulation frame (60 FPS) used to convert G values
pub const FRAME_TIME_MS: f64 = 16.67;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Hold time before a movement key starts repeating
pub const KEY_REPEAT_DELAY_MS: u32 = 400;

/// Repeat interval while a movement key is held
pub const KEY_REPEAT_INTERVAL_MS: u32 = 200;

/// Repeat interval once the key has been held past `KEY_FAST_THRESHOLD_MS`
pub const KEY_REPEAT_FAST_INTERVAL_MS: u32 = 50;

/// Hold time after which repeats switch to the fast interval
pub const KEY_FAST_THRESHOLD_MS: u32 = 700;

/// Base points for a normal clear, indexed by line count.
///
/// The awarded score is `base * level`.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Base points for a clear that leaves the board empty, indexed by line count.
pub const PERFECT_CLEAR_SCORES: [u32; 5] = [0, 800, 1200, 1800, 2000];

/// Base points for a perfect-clear tetris directly following another tetris.
pub const PERFECT_CLEAR_B2B_TETRIS_SCORE: u32 = 3200;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, saturating at 255.
    ///
    /// ```
    /// use neon_tetris_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(100, 200, 10).scaled(0.5), Rgb::new(50, 100, 5));
    /// assert_eq!(Rgb::new(200, 0, 0).scaled(2.0).r, 255);
    /// ```
    pub fn scaled(self, factor: f32) -> Self {
        let f = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(color)`: occupied cell, drawn in the color of the piece that filled it
///
/// Occupancy and color live in one value so they can never disagree.
pub type Cell = Option<Rgb>;

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index (0..7)
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Look up a kind by catalog index, clamping out-of-range indices to the last entry.
    ///
    /// ```
    /// use neon_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), PieceKind::I);
    /// assert_eq!(PieceKind::from_index(6), PieceKind::L);
    /// assert_eq!(PieceKind::from_index(99), PieceKind::L);
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Quarter-turn orientation of a piece relative to its spawn orientation
///
/// The cycle goes: North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use neon_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use neon_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotate one step in the given direction
    pub fn rotate(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Requests the input layer can make of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks it if it cannot move
    SoftDrop,
    /// Drop piece until it locks
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Hold current piece (once per lock)
    Hold,
    /// Toggle pause state
    Pause,
    /// Replace the game with a brand-new one
    Restart,
}

impl GameAction {
    /// Parse action from a camelCase (or any-case) string
    ///
    /// ```
    /// use neon_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECCW"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle state of a game
///
/// `GameOver` is terminal; only a restart (a brand-new game) leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Paused,
    GameOver,
}
