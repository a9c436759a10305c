//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: clear, cursor home, then each row. The
//! sequence is encoded into a reusable byte buffer and written once, so a
//! frame never reaches the terminal half-drawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer with no status lines.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.present(fb, &[])
    }

    /// Draw a framebuffer followed by status lines below the grid.
    pub fn present(&mut self, fb: &FrameBuffer, status: &[&str]) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, status, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Status lines follow the grid after one blank line.
pub fn encode_frame_into(fb: &FrameBuffer, status: &[&str], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style = CellStyle::PLAIN;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if cell.style != current_style {
                apply_style_into(out, cell.style)?;
                current_style = cell.style;
            }
            out.queue(Print(cell.ch))?;
        }
        // Raw mode: newline alone does not return the carriage.
        out.queue(Print("\r\n"))?;
    }

    if current_style != CellStyle::PLAIN {
        out.queue(SetAttribute(Attribute::Reset))?;
    }

    if !status.is_empty() {
        out.queue(Print("\r\n"))?;
        for line in status {
            out.queue(Print(line))?;
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.reverse {
        out.queue(SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}
