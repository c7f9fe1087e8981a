//! GameView: draws a `GameSnapshot` into a framebuffer.
//!
//! Pure, no I/O.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Board layout in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal columns per board cell; glyphs are about twice as tall as wide.
const CELL_W: u16 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render one frame, reusing `fb`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let inner_w = (snap.cols as u16).saturating_mul(CELL_W);
        let inner_h = snap.rows as u16;
        let (w, h) = (inner_w.saturating_add(2), inner_h.saturating_add(2));
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let play_area = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, inner_w, inner_h, ' ', play_area);
        draw_border(fb, frame, border);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                match snap.cell_with_active(row, col) {
                    Some(color) => {
                        let style = CellStyle::new(block_rgb(color), BOARD_BG).bold();
                        fill_cell(fb, frame, row, col, '█', style);
                    }
                    None => fill_cell(fb, frame, row, col, '·', empty),
                }
            }
        }

        draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_game_over(fb, frame, snap.score);
        }
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

/// Board cell `(row, col)` as a `CELL_W`-wide run inside the frame.
fn fill_cell(
    fb: &mut FrameBuffer,
    frame: Frame,
    row: usize,
    col: usize,
    ch: char,
    style: CellStyle,
) {
    let px = (col as u16).saturating_mul(CELL_W).saturating_add(frame.x + 1);
    let py = (row as u16).saturating_add(frame.y + 1);
    fb.hline(px, py, CELL_W, ch, style);
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
    let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
    if panel_x.saturating_add(8) > viewport.width {
        return;
    }

    let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
    let hint = CellStyle::new(Rgb::new(120, 120, 130), SCREEN_BG);

    let mut y = frame.y;
    for (name, n) in [("SCORE", snap.score), ("LINES", snap.lines)] {
        fb.put_str(panel_x, y, name, label);
        fb.put_u32(panel_x, y.saturating_add(1), n, value);
        y = y.saturating_add(3);
    }

    let hints: &[&str] = if snap.game_over {
        &["r  restart", "q  quit"]
    } else {
        &["←→ move", "↑  rotate", "↓  drop", "q  quit"]
    };
    for line in hints {
        fb.put_str(panel_x, y, line, hint);
        y = y.saturating_add(1);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// "GAME OVER" with the final score one line below, centred on the board.
fn draw_game_over(fb: &mut FrameBuffer, frame: Frame, score: u32) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = frame.y.saturating_add(frame.h / 2).saturating_sub(1);

    let title = "GAME OVER";
    let title_x = frame.x + frame.w.saturating_sub(title.len() as u16) / 2;
    fb.put_str(title_x, mid_y, title, style);

    let digits = digit_count(score);
    let score_w = 6 + digits;
    let score_x = frame.x + frame.w.saturating_sub(score_w) / 2;
    fb.put_str(score_x, mid_y + 1, "SCORE ", style);
    fb.put_u32(score_x + 6, mid_y + 1, score, style);
}

fn digit_count(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn block_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}
