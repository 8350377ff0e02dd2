//! GameView: lays a [`GameSnapshot`] out into a terminal framebuffer.
//!
//! This module is pure (no I/O), so layouts can be checked in tests.
//!
//! ```text
//! Lines cleared: N
//! Next piece: X  Stored piece: Y
//!
//! ┌────────────────────┐   keys
//! │ board, 2 cols/cell │   ...
//! └────────────────────┘
//! status message
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Rows above the board frame: two header lines and a gap.
const HEADER_ROWS: u16 = 3;

/// Rows below the board frame: the status line.
const FOOTER_ROWS: u16 = 1;

/// Widest cell; keeps frame arithmetic inside `u16`.
pub const MAX_CELL_WIDTH: u16 = 8;

const HELP: [&str; 8] = [
    "KEYS",
    "←/a  left",
    "→/d  right",
    "↓/s  down",
    "↑/w  rotate",
    "spc  drop",
    "c/z  hold",
    "o save  q quit",
];

const BG: Rgb = Rgb::new(30, 30, 40);
const TEXT: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220));
const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200));

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

/// Terminal layout of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Draw the shadow piece under the active one.
    show_shadow: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares the terminal glyph aspect ratio
        Self {
            cell_w: 2,
            show_shadow: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_WIDTH),
            ..Self::default()
        }
    }

    pub fn with_shadow(mut self, show_shadow: bool) -> Self {
        self.show_shadow = show_shadow;
        self
    }

    /// Outer size of the board including its border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Top-left corner of the board frame within `viewport`.
    ///
    /// The whole screen (header, frame, status line) is centered when it
    /// fits, otherwise it is pinned to the top-left.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let total_h = HEADER_ROWS + frame_h + FOOTER_ROWS;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(total_h) / 2 + HEADER_ROWS;
        (x, y)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `status` is a one-line message shown under the board, such as the
    /// outcome of the last save.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let (frame_w, frame_h) = self.frame_size();
        let (x0, y0) = self.frame_origin(viewport);
        let header_y = y0 - HEADER_ROWS;

        fb.put_str(
            x0,
            header_y,
            &format!("Lines cleared: {}", snap.lines_cleared),
            TEXT.bold(),
        );
        let mut next = format!("Next piece: {}", snap.next.as_char());
        if let Some(held) = snap.held {
            next.push_str(&format!("  Stored piece: {}", held.as_char()));
        }
        fb.put_str(x0, header_y + 1, &next, TEXT);

        self.draw_border(fb, x0, y0, frame_w, frame_h);

        for (row, cells) in snap.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(shape) => self.draw_block(fb, x0, y0, row as i8, col as i8, *shape),
                    None => self.fill_cell(fb, x0, y0, row as i8, col as i8, '·', empty_style()),
                }
            }
        }

        if self.show_shadow && !snap.game_over {
            let style = CellStyle::plain(Rgb::new(140, 140, 140)).on(BG).dim();
            for (row, col) in snap.shadow.cells() {
                self.fill_cell(fb, x0, y0, row, col, '░', style);
            }
        }

        let shape = snap.active.shape();
        for (row, col) in snap.active.cells() {
            self.draw_block(fb, x0, y0, row, col, shape);
        }

        let panel_x = x0 + frame_w + 3;
        if panel_x + 14 <= viewport.width {
            for (i, line) in HELP.iter().enumerate() {
                let style = if i == 0 { TEXT.bold() } else { TEXT.dim() };
                fb.put_str(panel_x, y0 + i as u16, line, style);
            }
        }

        if let Some(status) = status {
            fb.put_str(x0, y0 + frame_h, status, TEXT);
        }

        if snap.game_over {
            let text = "GAME OVER";
            let x = x0 + frame_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, y0 + frame_h / 2, text, TEXT.bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, row: i8, col: i8, shape: Shape) {
        let style = CellStyle::plain(shape_color(shape)).on(BG).bold();
        self.fill_cell(fb, x0, y0, row, col, '█', style);
    }

    /// Paint one board cell. Cells outside the grid (above it, mostly) are
    /// skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        row: i8,
        col: i8,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..BOARD_HEIGHT as i8).contains(&row) || !(0..BOARD_WIDTH as i8).contains(&col) {
            return;
        }
        let x = x0 + 1 + col as u16 * self.cell_w;
        let y = y0 + 1 + row as u16;
        fb.fill_rect(x, y, self.cell_w, 1, ch, style);
    }
}

fn empty_style() -> CellStyle {
    CellStyle::plain(Rgb::new(90, 90, 100)).on(BG).dim()
}

fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(80, 220, 220),
        Shape::O => Rgb::new(240, 220, 80),
        Shape::T => Rgb::new(200, 120, 220),
        Shape::S => Rgb::new(100, 220, 120),
        Shape::Z => Rgb::new(220, 80, 80),
        Shape::J => Rgb::new(80, 120, 220),
        Shape::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn test_frame_size_tracks_cell_width() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1).frame_size(), (12, 22));
        assert_eq!(GameView::new(0).frame_size(), (12, 22));
        assert_eq!(
            GameView::new(u16::MAX).frame_size(),
            (BOARD_WIDTH as u16 * MAX_CELL_WIDTH + 2, 22)
        );
    }

    #[test]
    fn test_origin_pins_to_top_when_too_small() {
        let view = GameView::default();
        assert_eq!(view.frame_origin(Viewport::new(10, 10)), (0, HEADER_ROWS));
    }

    #[test]
    fn test_every_shape_has_distinct_color() {
        for (i, &a) in Shape::ALL.iter().enumerate() {
            for &b in &Shape::ALL[i + 1..] {
                assert_ne!(shape_color(a), shape_color(b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_no_shadow_when_disabled() {
        let mut snap = GameSnapshot::from_piece(Piece::spawn(Shape::O));
        snap.shadow.set_row(18);
        let fb = GameView::default()
            .with_shadow(false)
            .render(&snap, None, Viewport::new(22, 26));
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(!all.contains('░'));
    }
}
