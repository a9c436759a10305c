//! MenuView: lays a [`Menu`] out on a bordered screen.

use crate::core::Menu;
use crate::fb::{CellStyle, FrameBuffer};

const TITLE_Y: u16 = 2;
const MENU_START_Y: u16 = 5;
const ITEM_SPACING: u16 = 2;
const MESSAGE_X: u16 = 10;
const MESSAGE_Y: u16 = 10;

pub const MENU_HINT: &str = "Arrow keys to navigate, Enter to select, Q to quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    /// Render a menu over the whole framebuffer.
    pub fn render_into(&self, menu: &Menu, fb: &mut FrameBuffer) {
        fb.clear();
        draw_border(fb);

        let w = fb.width();
        let title_x = w.saturating_sub(menu.title().chars().count() as u16) / 2;
        fb.put_str(title_x, TITLE_Y, menu.title(), CellStyle::BOLD);

        for (i, item) in menu.items().iter().enumerate() {
            let y = MENU_START_Y + (i as u16) * ITEM_SPACING;
            let mut text = format!(" [{}] {}", item.key, item.label);
            if !item.enabled {
                text.push_str(" (disabled)");
            }
            let label_w = item.label.chars().count() as u16 + 6;
            let x = w.saturating_sub(label_w) / 2;
            let style = if i == menu.selected() && item.enabled {
                CellStyle::REVERSE
            } else {
                CellStyle::PLAIN
            };
            fb.put_str(x, y, &text, style);
        }

        if fb.height() >= 3 {
            fb.put_str(2, fb.height() - 3, MENU_HINT, CellStyle::PLAIN);
        }
    }
}

/// Render a plain message screen, one line every other row.
pub fn render_message(fb: &mut FrameBuffer, lines: &[&str]) {
    fb.clear();
    for (i, line) in lines.iter().enumerate() {
        fb.put_str(MESSAGE_X, MESSAGE_Y + (i as u16) * 2, line, CellStyle::PLAIN);
    }
}

fn draw_border(fb: &mut FrameBuffer) {
    let (w, h) = (fb.width(), fb.height());
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::PLAIN;
    for x in 1..w - 1 {
        fb.put_char(x, 0, '-', style);
        fb.put_char(x, h - 1, '-', style);
    }
    for y in 1..h - 1 {
        fb.put_char(0, y, '|', style);
        fb.put_char(w - 1, y, '|', style);
    }
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        fb.put_char(x, y, '+', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_viewport_does_not_panic() {
        let menu = Menu::new("X");
        let mut fb = FrameBuffer::new(1, 1);
        MenuView::new().render_into(&menu, &mut fb);
        let mut fb = FrameBuffer::new(0, 0);
        MenuView::new().render_into(&menu, &mut fb);
    }
}
