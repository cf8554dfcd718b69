//! Plain-text layout builder
//!
//! Accumulates a UTF-8 report line by line. Widths are display columns,
//! see [`crate::display_width`].

use crate::encoding::{display_width, pad_display};

/// Cell alignment inside a fixed-width column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// String-based report builder
pub struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    /// Create a new builder with the line width (in columns) used by separators
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    // === Text Output ===

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        self.write_line(&"=".repeat(self.width))
    }

    /// Print a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.write_line(&"-".repeat(self.width))
    }

    /// Title framed by `run` fill characters on each side
    ///
    /// `banner("報表", '=', 3)` prints `=== 報表 ===`.
    pub fn banner(&mut self, title: &str, fill: char, run: usize) -> &mut Self {
        let side = fill.to_string().repeat(run);
        self.write_line(&format!("{} {} {}", side, title, side))
    }

    // === Layout Helpers ===

    /// Print one fixed-width table row
    ///
    /// Left-aligned cells (text) are padded or truncated to their column.
    /// Right-aligned cells (numbers) are never cut: a value wider than its
    /// column pushes the rest of the row right. Adjacent cells are always
    /// separated by at least one space. Trailing padding is trimmed.
    pub fn row(&mut self, cells: &[(&str, usize, Align)]) -> &mut Self {
        let mut line = String::new();
        for (text, width, align) in cells {
            let cell = match align {
                Align::Left => pad_display(text, *width, false),
                Align::Right => pad_display_fit(text, *width),
            };
            if !line.is_empty() && !line.ends_with(' ') && !cell.starts_with(' ') {
                line.push(' ');
            }
            line.push_str(&cell);
        }
        let trimmed = line.trim_end().to_string();
        self.write_line(&trimmed)
    }

    // === Build ===

    /// Finalize and return the accumulated string
    pub fn finalize(self) -> String {
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

/// Right-align without truncating
fn pad_display_fit(s: &str, width: usize) -> String {
    let spaces = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(spaces), s)
}

impl Default for TextBuilder {
    fn default() -> Self {
        Self::new(50)
    }
}
