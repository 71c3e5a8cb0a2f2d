//! Growable text canvas
//!
//! Rows are appended on demand, lines are padded with spaces on demand.
//! Nothing is ever shifted or removed: writing at a column that already
//! holds a character overwrites it in place.

use std::fmt;
use std::io::{self, Write};

/// Fill character used when padding a line out to a column
pub const BLANK: char = ' ';

/// Ordered, growable sequence of growable text lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    lines: Vec<Vec<char>>,
}

impl Canvas {
    /// Empty canvas (no lines)
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines created so far
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True if no line was ever created
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current length of `row` (0 for rows not created yet)
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Vec::len)
    }

    /// Set the character at (row, col), padding with blanks as needed
    pub fn write_at(&mut self, row: usize, col: usize, ch: char) {
        let line = self.line_mut(row);
        if col < line.len() {
            line[col] = ch;
        } else {
            line.resize(col, BLANK);
            line.push(ch);
        }
    }

    /// Append a character at the end of `row`
    pub fn append_at(&mut self, row: usize, ch: char) {
        self.line_mut(row).push(ch);
    }

    /// Character at (row, col), if that position was ever written or padded
    #[inline]
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.lines.get(row)?.get(col).copied()
    }

    /// One line as text
    pub fn line(&self, row: usize) -> Option<String> {
        self.lines.get(row).map(|line| line.iter().collect())
    }

    /// All lines as text, in row order
    pub fn to_lines(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.iter().collect()).collect()
    }

    /// Write every line, newline-terminated, in row order
    ///
    /// An empty canvas writes nothing at all.
    pub fn emit<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for line in &self.lines {
            for ch in line {
                sink.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            }
            sink.write_all(b"\n")?;
        }
        Ok(())
    }

    fn line_mut(&mut self, row: usize) -> &mut Vec<char> {
        if row >= self.lines.len() {
            self.lines.resize_with(row + 1, Vec::new);
        }
        &mut self.lines[row]
    }
}

/// Same bytes as [`Canvas::emit`].
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            for ch in line {
                fmt::Write::write_char(f, *ch)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(feature = "visualize")]
impl serde::Serialize for Canvas {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_pads_with_blanks() {
        let mut canvas = Canvas::new();
        canvas.write_at(2, 3, '*');

        assert_eq!(canvas.line_count(), 3);
        assert_eq!(canvas.line(0).as_deref(), Some(""));
        assert_eq!(canvas.line(2).as_deref(), Some("   *"));
        assert_eq!(canvas.char_at(2, 1), Some(' '));
        assert_eq!(canvas.char_at(2, 4), None);
    }

    #[test]
    fn test_write_overwrites_without_shifting() {
        let mut canvas = Canvas::new();
        for ch in "abcd".chars() {
            canvas.append_at(0, ch);
        }
        canvas.write_at(0, 1, 'X');

        assert_eq!(canvas.line(0).as_deref(), Some("aXcd"));
        assert_eq!(canvas.line_len(0), 4);
    }

    #[test]
    fn test_append_goes_to_line_end() {
        let mut canvas = Canvas::new();
        canvas.write_at(1, 2, '*');
        canvas.append_at(1, '-');
        canvas.append_at(3, '|');

        assert_eq!(canvas.to_lines(), vec!["", "  *-", "", "|"]);
    }

    #[test]
    fn test_emit_matches_display() {
        let mut canvas = Canvas::new();
        canvas.write_at(0, 0, '*');
        canvas.write_at(1, 0, '|');

        let mut out = Vec::new();
        canvas.emit(&mut out).expect("write to vec");
        assert_eq!(out, b"*\n|\n");
        assert_eq!(canvas.to_string(), "*\n|\n");
    }

    #[test]
    fn test_empty_canvas_emits_nothing() {
        let canvas = Canvas::new();
        let mut out = Vec::new();
        canvas.emit(&mut out).expect("write to vec");
        assert!(out.is_empty());
        assert!(canvas.is_empty());
    }
}
