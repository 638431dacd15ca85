//! GameView: draws a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so every frame can be checked from unit tests.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Panel needs room for "SCORE" plus a 4-cell preview
const MIN_PANEL_W: u16 = 10;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen position of the well: top-left corner of its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WellRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per grid cell
    cell_w: u16,
    /// Terminal rows per grid cell
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into a reused framebuffer; resizes it to `viewport` first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().with_char(' '));

        let well = self.well_rect(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        draw_border(fb, well, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, well, x as u16, y as u16, *kind),
                    None => self.draw_empty(fb, well, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active.as_ref() {
            self.draw_piece(fb, well, active);
        }

        self.draw_side_panel(fb, snap, viewport, well);

        if snap.game_over {
            draw_overlay(fb, well, "GAME OVER", Some("R to restart"));
        } else if snap.paused {
            draw_overlay(fb, well, "PAUSED", None);
        }
    }

    /// Allocating convenience wrapper around [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn well_rect(&self, viewport: Viewport) -> WellRect {
        let w = GRID_WIDTH as u16 * self.cell_w + 2;
        let h = GRID_HEIGHT as u16 * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        WellRect { x, y, w, h }
    }

    fn cell_origin(&self, well: WellRect, x: u16, y: u16) -> (u16, u16) {
        (
            well.x + 1 + x * self.cell_w,
            well.y + 1 + y * self.cell_h,
        )
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, well: WellRect, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        let (px, py) = self.cell_origin(well, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, well: WellRect, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(Rgb::from(kind), WELL_BG).bold();
        let (px, py) = self.cell_origin(well, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    /// Blocks above or beside the grid are skipped.
    fn draw_piece(&self, fb: &mut FrameBuffer, well: WellRect, piece: &PieceSnapshot) {
        for (x, y) in piece.blocks() {
            if (0..GRID_WIDTH as i8).contains(&x) && (0..GRID_HEIGHT as i8).contains(&y) {
                self.draw_block(fb, well, x as u16, y as u16, piece.kind);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        well: WellRect,
    ) {
        let panel_x = well.x.saturating_add(well.w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = well.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let next_style = CellStyle::new(Rgb::from(snap.next.kind), SCREEN_BG).bold();
        for (dx, dy) in snap.next.shape.offsets() {
            let px = panel_x + dx as u16 * 2;
            let py = y + dy as u16;
            fb.put_str(px, py, "██", next_style);
        }
        y = y.saturating_add(snap.next.shape.rows() as u16 + 1);

        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        if snap.fast_drop && snap.playable() {
            fb.put_str(panel_x, y, "FAST", value.dim());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, r: WellRect, style: CellStyle) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let right = r.x + r.w - 1;
    let bottom = r.y + r.h - 1;

    fb.put_char(r.x, r.y, '┌', style);
    fb.put_char(right, r.y, '┐', style);
    fb.put_char(r.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for x in r.x + 1..right {
        fb.put_char(x, r.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in r.y + 1..bottom {
        fb.put_char(r.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
}

/// Centered text over the well, with an optional hint line below.
fn draw_overlay(fb: &mut FrameBuffer, well: WellRect, text: &str, hint: Option<&str>) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = well.y.saturating_add(well.h / 2);
    put_centered(fb, well, mid_y, text, style);
    if let Some(hint) = hint {
        put_centered(fb, well, mid_y.saturating_add(1), hint, style);
    }
}

fn put_centered(fb: &mut FrameBuffer, well: WellRect, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = well.x.saturating_add(well.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    fn viewport() -> Viewport {
        Viewport::new(60, 24)
    }

    fn find(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        (0..fb.height()).find_map(|y| {
            let row = fb.row_text(y);
            row.find(needle)
                .map(|i| (row[..i].chars().count() as u16, y))
        })
    }

    #[test]
    fn empty_board_draws_frame_and_dots() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&GameSnapshot::default(), viewport());

        // 10 cells * 2 columns + 2 border columns = 22, centered in 60.
        assert_eq!(fb.get(19, 0).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(40, 0).map(|c| c.ch), Some('┐'));
        assert_eq!(fb.get(19, 21).map(|c| c.ch), Some('└'));
        assert_eq!(fb.get(20, 1).map(|c| c.ch), Some('·'));
    }

    #[test]
    fn locked_cells_use_piece_colors() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = Some(PieceKind::Z);

        let fb = view.render(&snap, viewport());
        let cell = fb.get(20, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(PieceKind::Z));
        assert_eq!(fb.get(21, 20).unwrap().ch, '█');
    }

    #[test]
    fn active_piece_is_drawn_and_clipped() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let mut snap = GameSnapshot::default();
        // Vertical I with its top half above the grid.
        let piece = Piece::at(PieceKind::I, 0, -2).rotated();
        snap.active = Some(piece.into());

        let fb = view.render(&snap, viewport());
        assert_eq!(fb.get(20, 1).unwrap().ch, '█');
        assert_eq!(fb.get(20, 2).unwrap().ch, '█');
        assert_eq!(fb.get(20, 3).unwrap().ch, '·');
        // The border row is untouched by the hidden blocks.
        assert_eq!(fb.get(20, 0).unwrap().ch, '─');
    }

    #[test]
    fn side_panel_shows_counters() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let snap = GameSnapshot {
            score: 1600,
            level: 2,
            lines: 12,
            ..GameSnapshot::default()
        };

        let fb = view.render(&snap, viewport());
        let (x, y) = find(&fb, "SCORE").unwrap();
        assert_eq!(x, 43);
        assert!(fb.row_text(y + 1).contains("1600"));
        assert!(find(&fb, "LEVEL").is_some());
        assert!(find(&fb, "LINES").is_some());
        assert!(find(&fb, "NEXT").is_some());
    }

    #[test]
    fn narrow_viewport_hides_panel() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(30, 24));
        assert!(find(&fb, "SCORE").is_none());
    }

    #[test]
    fn overlays() {
        let view = GameView::default();
        let paused = GameSnapshot {
            paused: true,
            ..GameSnapshot::default()
        };
        assert!(find(&view.render(&paused, viewport()), "PAUSED").is_some());

        let over = GameSnapshot {
            game_over: true,
            ..GameSnapshot::default()
        };
        let fb = view.render(&over, viewport());
        assert!(find(&fb, "GAME OVER").is_some());
        assert!(find(&fb, "R to restart").is_some());
    }

    #[test]
    fn render_into_resizes_reused_buffer() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&GameSnapshot::default(), viewport(), &mut fb);
        assert_eq!((fb.width(), fb.height()), (60, 24));
    }
}
