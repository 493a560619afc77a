//! Pieces module - tetromino catalog, matrix rotation and wall kicks
//!
//! Every shape is a square boolean matrix: I is padded to 4x4, O is 2x2 and
//! T/S/Z/J/L are 3x3. Rotation is a plain 90° matrix transform; the anchor is
//! only adjusted afterwards, by the first wall-kick offset that fits.

use crate::piece::Piece;
use crate::types::{PieceKind, Rgb};

/// Largest shape matrix side length in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset tried after a rotation, relative to the pre-rotation anchor
pub type KickOffset = (i8, i8);

/// Square boolean shape matrix of side 2, 3 or 4.
///
/// Stored in a fixed 4x4 array so pieces stay `Copy` and rotation never
/// allocates; cells outside `size x size` are always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of `#` (filled) and `.` (empty).
    ///
    /// The row count is the matrix size. Used for the static catalog and tests.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len().min(MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().take(size).enumerate() {
            for (x, ch) in row.chars().take(size).enumerate() {
                cells[y][x] = ch == '#';
            }
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at column `x`, row `y` is filled
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.cells[y][x]
    }

    /// The matrix rotated a quarter turn.
    ///
    /// Clockwise maps `old[i][j]` to `new[j][n-1-i]`; counter-clockwise maps
    /// `old[i][j]` to `new[n-1-j][i]`.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for i in 0..n {
            for j in 0..n {
                if clockwise {
                    cells[j][n - 1 - i] = self.cells[i][j];
                } else {
                    cells[n - 1 - j][i] = self.cells[i][j];
                }
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Matrix-local `(x, y)` of every filled cell, row by row.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| (0..n).filter(move |&x| self.cells[y][x]).map(move |x| (x, y)))
    }

    /// Rows of the matrix as `#`/`.` strings (for debugging and tests).
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.size())
            .map(|y| {
                (0..self.size())
                    .map(|x| if self.cells[y][x] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// Spawn-orientation shape for a piece kind
pub fn catalog_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&["....", "####", "....", "...."]),
        PieceKind::O => ShapeMatrix::from_rows(&["##", "##"]),
        PieceKind::T => ShapeMatrix::from_rows(&[".#.", "###", "..."]),
        PieceKind::S => ShapeMatrix::from_rows(&[".##", "##.", "..."]),
        PieceKind::Z => ShapeMatrix::from_rows(&["##.", ".##", "..."]),
        PieceKind::J => ShapeMatrix::from_rows(&["#..", "###", "..."]),
        PieceKind::L => ShapeMatrix::from_rows(&["..#", "###", "..."]),
    }
}

/// Neon palette color for a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 230, 255),   // cyan
        PieceKind::O => Rgb::new(255, 0, 128),   // hot pink
        PieceKind::T => Rgb::new(128, 0, 255),   // electric purple
        PieceKind::S => Rgb::new(0, 255, 128),   // green
        PieceKind::Z => Rgb::new(255, 0, 204),   // magenta
        PieceKind::J => Rgb::new(51, 128, 255),  // electric blue
        PieceKind::L => Rgb::new(255, 77, 179),  // sunset pink
    }
}

/// Kicks for the 4x4 I piece
const I_KICKS: [KickOffset; 5] = [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)];

/// The 2x2 O piece only ever needs the identity
const O_KICKS: [KickOffset; 1] = [(0, 0)];

/// Kicks shared by every 3x3 piece
const STANDARD_KICKS: [KickOffset; 6] = [(0, 0), (-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

/// Kick candidates for a shape of the given size, in priority order
pub fn wall_kicks(shape_size: usize) -> &'static [KickOffset] {
    match shape_size {
        4 => &I_KICKS,
        2 => &O_KICKS,
        _ => &STANDARD_KICKS,
    }
}

/// Try to rotate a piece with wall kicks.
///
/// Returns the rotated piece at the first kick offset `fits` accepts, or
/// `None` if every candidate is rejected. The input piece is never modified.
pub fn try_rotate(piece: &Piece, clockwise: bool, fits: impl Fn(&Piece) -> bool) -> Option<Piece> {
    let rotated = piece.rotated(clockwise);
    wall_kicks(rotated.shape().size())
        .iter()
        .map(|&(dx, dy)| rotated.translated(dx, dy))
        .find(|candidate| fits(candidate))
}
