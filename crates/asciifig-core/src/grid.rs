//! Figure grid loading.
//!
//! Parses multi-line ASCII text into an immutable rectangular character
//! grid, recording the line-ending convention so rendered rectangles can
//! reproduce it.

use crate::error::MalformedFigure;

/// An immutable rectangular character grid.
///
/// Every row has the same width. Rows shorter than the longest row are
/// right-padded with spaces at parse time (editors commonly strip trailing
/// blanks, so a short row is not by itself malformed). Padding never
/// synthesizes border characters; if a truncated row cut off part of a
/// border, the junction graph builder reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
    crlf: bool,
    trailing_newline: bool,
}

impl Grid {
    /// Parse raw multi-line text into a grid.
    ///
    /// Lines are split on `\n`; a `\r` suffix on any line selects CRLF as
    /// the grid's line-ending convention. A single trailing empty line
    /// (i.e. the text ends with a line break) is discarded and remembered
    /// so rendering can reproduce it.
    ///
    /// # Errors
    ///
    /// [`MalformedFigure::EmptyFigure`] if the text contains no rows, and
    /// [`MalformedFigure::EmptyRow`] if any non-trailing row is empty.
    pub fn parse(text: &str) -> Result<Self, MalformedFigure> {
        let mut crlf = false;
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| match line.strip_suffix('\r') {
                Some(stripped) => {
                    crlf = true;
                    stripped
                }
                None => line,
            })
            .collect();

        let trailing_newline = lines.last().is_some_and(|line| line.is_empty());
        if trailing_newline {
            lines.pop();
        }

        if lines.is_empty() || lines.iter().all(|line| line.is_empty()) {
            return Err(MalformedFigure::EmptyFigure);
        }
        if let Some(row) = lines.iter().position(|line| line.is_empty()) {
            return Err(MalformedFigure::EmptyRow { row });
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect();

        Ok(Self {
            rows,
            width,
            crlf,
            trailing_newline,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (constant across rows).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Character at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The line-ending convention of the source text.
    pub fn line_ending(&self) -> &'static str {
        if self.crlf { "\r\n" } else { "\n" }
    }

    /// True if the source text ended with a line break.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }
}
