//! Terminal Surface - Relative positioning for in-place redraws
//!
//! This module solves the "where is my cursor" problem by using relative
//! coordinates: after the first frame we know how many rows we printed, so
//! a redraw moves UP that many rows and repaints line by line.
//!
//! The trait exists so the renderer can be driven against a fake surface
//! with fixed dimensions in tests.

use crate::error::RenderError;
use crossterm::{
    QueueableCommand,
    cursor::{MoveToColumn, MoveUp},
    terminal::{self, Clear, ClearType},
};
use std::io::{Stdout, Write, stdout};

/// Capability consumed by the renderer: dimension queries plus an in-place
/// multi-line redraw that erases the previous frame.
pub trait TerminalSurface {
    /// Current terminal width in character cells
    fn width(&self) -> u16;

    /// Current terminal height in character cells
    fn height(&self) -> u16;

    /// Repaint the full frame in place, erasing the previous one.
    ///
    /// Lines may contain ANSI style sequences; the surface treats them as
    /// opaque text.
    fn redraw(&mut self, lines: &[String]) -> Result<(), RenderError>;

    /// Leave the frame on screen and park the cursor below it, so whatever
    /// prints next (prompt, table, shell) starts on a clean line.
    fn finish(&mut self) -> Result<(), RenderError>;
}

/// Real terminal surface backed by crossterm
#[derive(Debug)]
pub struct TermSurface {
    stdout: Stdout,
    drawn_rows: u16,
}

impl TermSurface {
    /// Create a surface over the process stdout
    pub fn new() -> Self {
        Self {
            stdout: stdout(),
            drawn_rows: 0,
        }
    }
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface for TermSurface {
    fn width(&self) -> u16 {
        terminal::size().map_or(80, |(w, _)| w)
    }

    fn height(&self) -> u16 {
        terminal::size().map_or(24, |(_, h)| h)
    }

    fn redraw(&mut self, lines: &[String]) -> Result<(), RenderError> {
        // 1. Move back to the top of the previous frame
        if self.drawn_rows > 0 {
            self.stdout.queue(MoveUp(self.drawn_rows))?;
        }
        self.stdout.queue(MoveToColumn(0))?;

        // 2. Repaint line by line, clearing leftover characters as we go
        for line in lines {
            write!(self.stdout, "{line}")?;
            self.stdout.queue(Clear(ClearType::UntilNewLine))?;
            writeln!(self.stdout)?;
        }

        // 3. Flush the whole frame at once to avoid tearing
        self.stdout.flush()?;
        self.drawn_rows = lines.len() as u16;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        // Cursor already sits below the last repainted row; just make sure
        // the frame is flushed and forget it so a later redraw starts fresh.
        self.stdout.queue(MoveToColumn(0))?;
        self.stdout.flush()?;
        self.drawn_rows = 0;
        Ok(())
    }
}
