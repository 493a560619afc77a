//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const BACKGROUND: Rgb = Rgb::new(12, 0, 24);
const WELL: Rgb = Rgb::new(20, 0, 40);
const GRID: Rgb = Rgb::new(64, 0, 110);
const BORDER: Rgb = Rgb::new(255, 0, 204);
const LABEL: Rgb = Rgb::new(0, 255, 255);
const VALUE: Rgb = Rgb::new(0, 255, 128);
const BANNER: Rgb = Rgb::new(77, 0, 128);
const BANNER_TEXT: Rgb = Rgb::new(255, 0, 204);

/// Brightness of the ghost projection relative to the piece color
const GHOST_SCALE: f32 = 0.3;

/// Side panel column width
const PANEL_W: u16 = 12;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the bordered well in framebuffer coordinates.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, 4),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(GRID, BACKGROUND).cell(' '));

        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let total_w = frame_w + 2 + PANEL_W;
        let frame = Frame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        self.draw_border(fb, frame);

        // Locked cells, with a dotted grid for empty ones.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, frame, x as i8, y as i8, *color),
                    None => self.fill_cell(
                        fb,
                        frame,
                        x as i8,
                        y as i8,
                        '·',
                        CellStyle::new(GRID, WELL).dim(),
                    ),
                }
            }
        }

        if !snap.paused {
            let ghost_style = CellStyle::new(snap.active.color.scaled(GHOST_SCALE), WELL);
            let ghost = PieceSnapshot {
                y: snap.ghost_y,
                ..snap.active
            };
            for (x, y) in ghost.blocks() {
                self.fill_cell(fb, frame, x, y, '░', ghost_style);
            }
        }

        for (x, y) in snap.active.blocks() {
            self.draw_block(fb, frame, x, y, snap.active.color);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, snap, frame);
        } else if snap.paused {
            self.draw_banner(fb, frame, frame.y + frame.h / 2, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::new(BORDER, BACKGROUND).bold();
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '╔', style);
        fb.put_char(x + w - 1, y, '╗', style);
        fb.put_char(x, y + h - 1, '╚', style);
        fb.put_char(x + w - 1, y + h - 1, '╝', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '═', style);
            fb.put_char(x + dx, y + h - 1, '═', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '║', style);
            fb.put_char(x + w - 1, y + dy, '║', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, color: Rgb) {
        self.fill_cell(fb, frame, x, y, '█', CellStyle::new(color, WELL).bold());
    }

    /// Fill one board cell; cells outside the visible well are skipped
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + (x as u16) * self.cell_w;
        let py = frame.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle::new(LABEL, BACKGROUND).bold();
        let value = CellStyle::new(VALUE, BACKGROUND);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "HOLD", label);
        if let Some(held) = snap.held {
            // Hold is used up until the next lock
            self.draw_preview(fb, panel_x, y + 1, &held, !snap.can_hold);
        }
        y += 4;

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, &snap.next, false);
        y += 5;

        for (name, number) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }
    }

    /// Draw a piece shape trimmed to its filled bounding box
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot, dim: bool) {
        let min_x = piece.shape.filled().map(|(cx, _)| cx).min().unwrap_or(0);
        let min_y = piece.shape.filled().map(|(_, cy)| cy).min().unwrap_or(0);
        let color = if dim { piece.color.scaled(GHOST_SCALE) } else { piece.color };
        let style = CellStyle::new(color, BACKGROUND);

        for (cx, cy) in piece.shape.filled() {
            let px = x + ((cx - min_x) as u16) * self.cell_w;
            let py = y + (cy - min_y) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let mid = frame.y + frame.h / 2;
        self.draw_banner(fb, frame, mid - 2, "GAME OVER");
        self.draw_banner(fb, frame, mid - 1, "");
        self.draw_banner(fb, frame, mid, "SCORE");

        let style = CellStyle::new(VALUE, BANNER).bold();
        self.draw_banner(fb, frame, mid + 1, "");
        let digits = count_digits(snap.score);
        let x = frame.x + frame.w.saturating_sub(digits) / 2;
        fb.put_u32(x, mid + 1, snap.score, style);

        self.draw_banner(fb, frame, mid + 2, "");
        self.draw_banner(fb, frame, mid + 3, "R TO RESTART");
    }

    /// Centered text on a full-width band across the well
    fn draw_banner(&self, fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str) {
        let style = CellStyle::new(BANNER_TEXT, BANNER).bold();
        fb.fill_rect(frame.x + 1, y, frame.w - 2, 1, ' ', style);

        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn count_digits(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
