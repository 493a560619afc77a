use crate::piece::Piece;
use crate::pieces::ShapeMatrix;
use crate::types::{Cell, GameStatus, PieceKind, Rgb, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Render-facing copy of one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
    pub shape: ShapeMatrix,
}

impl PieceSnapshot {
    /// Absolute board coordinates of the piece's filled cells
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx as i8, self.y + dy as i8))
    }
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            color: value.color(),
            shape: *value.shape(),
        }
    }
}

/// Everything the rendering layer reads each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: PieceSnapshot,
    /// Anchor row the active piece would land on if hard-dropped
    pub ghost_y: i8,
    pub held: Option<PieceSnapshot>,
    pub next: PieceSnapshot,
    pub can_hold: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u64,
    pub last_clear: u32,
    pub back_to_back: bool,
}

impl GameSnapshot {
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Active
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let piece = PieceSnapshot::from(&Piece::new(PieceKind::I));
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: piece,
            ghost_y: piece.y,
            held: None,
            next: piece,
            can_hold: true,
            paused: false,
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
            last_clear: 0,
            back_to_back: false,
        }
    }
}
