//! GameView: maps a core [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, Color, MAX_SHAPE_SIZE, SPAWN_BUFFER_ROWS};

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

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BUFFER_BG: Rgb = Rgb::new(50, 40, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Width of the side panel including its gap from the board frame.
const PANEL_W: u16 = 16;

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up typical terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the board frame (border included) for a snapshot.
    pub fn frame_size(&self, snap: &Snapshot) -> (u16, u16) {
        (snap.columns * self.cell_w + 2, snap.rows + 2)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// The board and side panel are centered together in the viewport.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let total_w = frame_w + PANEL_W;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.rows {
            for column in 0..snap.columns {
                match snap.cell(column, row) {
                    Cell::Occupied(color) => self.draw_block(fb, start_x, start_y, column, row, color),
                    Cell::Empty => self.draw_empty(fb, start_x, start_y, column, row),
                }
            }
        }

        let falling = &snap.falling;
        for &(column, row) in falling.cells.iter() {
            if column >= 0 && row >= 0 && (column as u16) < snap.columns && (row as u16) < snap.rows {
                self.draw_block(fb, start_x, start_y, column as u16, row as u16, falling.color);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
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

    fn draw_empty(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, column: u16, row: u16) {
        let bg = if row < SPAWN_BUFFER_ROWS { BUFFER_BG } else { FIELD_BG };
        let style = Style::new(Rgb::new(90, 90, 100), bg).dim();
        let px = x0 + 1 + column * self.cell_w;
        fb.fill_rect(px, y0 + 1 + row, self.cell_w, 1, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, column: u16, row: u16, color: Color) {
        let px = x0 + 1 + column * self.cell_w;
        fb.fill_rect(px, y0 + 1 + row, self.cell_w, 1, '█', block_style(color));
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &Snapshot, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_str(x, y, "NEXT", label);
        // Shapes narrower than the 4-wide box sit half a cell in.
        let (ox, oy) = snap.next.origin;
        let size = snap
            .next
            .cells
            .iter()
            .map(|&(c, r)| (c - ox).max(r - oy) + 1)
            .max()
            .unwrap_or(0);
        let inset = if size < MAX_SHAPE_SIZE as i16 { self.cell_w / 2 } else { 0 };
        for &(column, row) in snap.next.cells.iter() {
            let (dx, dy) = (column - ox, row - oy);
            if dx < 0 || dy < 0 {
                continue;
            }
            let px = x + inset + dx as u16 * self.cell_w;
            let py = y + 1 + dy as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', block_style(snap.next.color));
        }

        let mut y = y + 2 + MAX_SHAPE_SIZE as u16;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "LEVEL", label);
        fb.put_u32(x, y + 1, snap.level, value);
        y += 3;

        fb.put_str(x, y, "ROWS LEFT", label);
        fb.put_u32(x, y + 1, snap.rows_until_next_level, value);
        y += 3;

        let help = value.dim();
        fb.put_str(x, y, "←→ move ↑ turn", help);
        fb.put_str(x, y + 1, "↓ drop  n new", help);
        fb.put_str(x, y + 2, "q quit", help);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(tx, y + h / 2, text, style);
    }
}

fn block_style(color: Color) -> Style {
    let fg = match color {
        Color::Green => Rgb::new(100, 220, 120),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Purple => Rgb::new(170, 90, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
    };
    Style::new(fg, FIELD_BG).bold()
}
