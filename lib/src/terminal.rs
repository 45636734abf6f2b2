//! Console queries and screen clearing
//!
//! The console size is read once at startup and treated as a snapshot.

use std::io::Write;

use crossterm::{cursor, execute, terminal};

use crate::error::{AsciiError, Result};

/// Console dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSize {
    pub width: u32,
    pub height: u32,
}

impl ConsoleSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ConsoleSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Query the current terminal size
///
/// # Returns
/// The terminal size in columns and rows, or an error if stdout is not a
/// terminal or the terminal reports a zero dimension
pub fn terminal_size() -> Result<ConsoleSize> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 || rows == 0 {
        return Err(AsciiError::UnsupportedDimensions {
            width: cols as u32,
            height: rows as u32,
        });
    }
    Ok(ConsoleSize::new(cols as u32, rows as u32))
}

/// Query the terminal size, falling back to `fallback` when the query fails
pub fn console_size_or(fallback: ConsoleSize) -> ConsoleSize {
    match terminal_size() {
        Ok(size) => size,
        Err(e) => {
            log::warn!(
                "could not query terminal size ({}), using {}x{}",
                e,
                fallback.width,
                fallback.height
            );
            fallback
        }
    }
}

/// Clear the whole screen and park the cursor in the top-left corner
pub fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    out.flush()?;
    Ok(())
}
