//! Piece module - a tetromino with its shape matrix, color and anchor
//!
//! All transforms return a new `Piece`; callers test the candidate against
//! the board and keep it only if it fits, so no half-applied state is ever
//! observable.

use crate::pieces::{catalog_shape, piece_color, ShapeMatrix};
use crate::types::{PieceKind, Rgb, Rotation, SPAWN_X, SPAWN_Y};

/// A tetromino: shape matrix, color, and the board position of the
/// matrix's top-left corner. `y` may be negative while the piece is
/// partially above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    shape: ShapeMatrix,
    color: Rgb,
}

impl Piece {
    /// Create a piece at the spawn anchor in its catalog orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
            shape: catalog_shape(kind),
            color: piece_color(kind),
        }
    }

    pub fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Absolute board coordinates of every filled cell.
    ///
    /// Recomputed on each call.
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx as i8, self.y + dy as i8))
    }

    /// The piece moved by `(dx, dy)`
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The piece with its shape rotated a quarter turn; the anchor is unchanged
    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            shape: self.shape.rotated(clockwise),
            rotation: self.rotation.rotate(clockwise),
            ..*self
        }
    }

    /// Put the piece back at the spawn anchor in its catalog orientation
    pub fn reset_to_spawn(&mut self) {
        *self = Self::new(self.kind);
    }
}
