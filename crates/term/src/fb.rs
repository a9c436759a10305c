//! Framebuffer and style types for terminal rendering.

use crate::core::for_each_line_point;
use crate::types::{ScreenPoint, BACKGROUND_CHAR};

/// Lines are cut at `(width + height) * CLIP_MARGIN_FACTOR` cells past each edge.
const CLIP_MARGIN_FACTOR: i64 = 4;

/// Minimal per-cell text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub bold: bool,
    pub reverse: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        bold: false,
        reverse: false,
    };

    pub const BOLD: CellStyle = CellStyle {
        bold: true,
        reverse: false,
    };

    pub const REVERSE: CellStyle = CellStyle {
        bold: false,
        reverse: true,
    };
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: BACKGROUND_CHAR,
            style: CellStyle::PLAIN,
        }
    }
}

/// 2D grid of character cells.
///
/// All writes are bounds-checked: anything outside the grid is silently
/// dropped. Projected geometry routinely lands off-screen, so clipping here
/// is the normal path, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// Character at a signed position, `None` when off-grid.
    pub fn char_at(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i].ch)
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Plot an unstyled character. No-op outside the grid.
    pub fn set_pixel(&mut self, x: i32, y: i32, ch: char) {
        self.set(
            x,
            y,
            Cell {
                ch,
                style: CellStyle::PLAIN,
            },
        );
    }

    /// Reset every cell to the background character.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x as i32, y as i32, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Rasterize a straight line, clipping cell by cell.
    ///
    /// Segments reaching far past the grid are first cut to a margin around
    /// it, so the walk stays proportional to the grid size.
    pub fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, ch: char) {
        if let Some((a, b)) = self.clip_to_margin(from, to) {
            for_each_line_point(a, b, |x, y| self.set_pixel(x, y, ch));
        }
    }

    /// Liang-Barsky clip against the grid plus its margin. Segments already
    /// inside the margin pass through untouched and keep their exact cells.
    fn clip_to_margin(
        &self,
        from: ScreenPoint,
        to: ScreenPoint,
    ) -> Option<(ScreenPoint, ScreenPoint)> {
        let margin = (self.width as i64 + self.height as i64).max(1) * CLIP_MARGIN_FACTOR;
        let (lo_x, hi_x) = (-margin, self.width as i64 + margin);
        let (lo_y, hi_y) = (-margin, self.height as i64 + margin);
        let inside = |p: ScreenPoint| {
            (lo_x..=hi_x).contains(&(p.x as i64)) && (lo_y..=hi_y).contains(&(p.y as i64))
        };
        if inside(from) && inside(to) {
            return Some((from, to));
        }

        let (x0, y0) = (from.x as f64, from.y as f64);
        let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        let bounds = [
            (-dx, x0 - lo_x as f64),
            (dx, hi_x as f64 - x0),
            (-dy, y0 - lo_y as f64),
            (dy, hi_y as f64 - y0),
        ];
        for (p, q) in bounds {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| ScreenPoint::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
        Some((at(t0), at(t1)))
    }

    /// Row `y` as a string, or `None` past the last row.
    pub fn row_string(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(
            self.cells[start..start + self.width as usize]
                .iter()
                .map(|c| c.ch)
                .collect(),
        )
    }

    /// Positions of every cell holding `ch`, in row-major order.
    pub fn positions_of(&self, ch: char) -> Vec<ScreenPoint> {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.ch == ch)
            .map(|(i, _)| ScreenPoint::new((i % w) as i32, (i / w) as i32))
            .collect()
    }
}
