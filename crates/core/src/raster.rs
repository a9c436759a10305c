//! Integer line rasterization.
//!
//! [`Line`] walks the grid cells between two endpoints using the classic
//! midpoint (Bresenham) error accumulator. It works for every octant and
//! never touches floating point, so long lines do not drift.

use crate::types::ScreenPoint;

/// Iterator over the cells of a straight line, endpoints included.
///
/// Steps run in `i64` so any pair of `i32` endpoints is safe. The walk is
/// still one cell per step; callers bound its length by clipping first.
#[derive(Debug, Clone)]
pub struct Line {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Line {
    pub fn new(from: ScreenPoint, to: ScreenPoint) -> Self {
        let (x0, y0) = (i64::from(from.x), i64::from(from.y));
        let (x1, y1) = (i64::from(to.x), i64::from(to.y));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.done {
            return None;
        }

        // x and y stay between the two i32 endpoints.
        let current = ScreenPoint::new(self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Exactly one cell per step along the major axis.
        let steps = (self.x1 - self.x).abs().max((self.y1 - self.y).abs());
        match usize::try_from(steps + 1) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Visit every cell on the line from `from` to `to`.
pub fn for_each_line_point(from: ScreenPoint, to: ScreenPoint, mut plot: impl FnMut(i32, i32)) {
    for p in Line::new(from, to) {
        plot(p.x, p.y);
    }
}
