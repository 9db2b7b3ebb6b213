//! Rectangle rendering.
//!
//! Re-renders an extracted face back into the ASCII rectangle format of
//! the original figure. The border is synthesized rather than copied: a
//! `+` shared with a neighboring rectangle at a T-junction belongs to the
//! source figure, not to this rectangle, so every face renders with clean
//! `+`/`-`/`|` borders regardless of what the shared characters were.

use crate::faces::Face;
use crate::grid::Grid;

/// Render one face as rectangle text.
///
/// Interior cells are copied from the grid verbatim; the border is
/// synthesized. Lines are joined with the grid's line-ending convention,
/// and a trailing line break is emitted iff the source figure ended with
/// one. Always succeeds for a face extracted from `grid`.
pub fn render_face(grid: &Grid, face: &Face) -> String {
    let rect = &face.bounds;
    let mut lines: Vec<String> = Vec::with_capacity(rect.height());

    for row in rect.top..=rect.bottom {
        let mut line = String::with_capacity(rect.width());
        for col in rect.left..=rect.right {
            let on_horizontal = row == rect.top || row == rect.bottom;
            let on_vertical = col == rect.left || col == rect.right;
            let ch = match (on_horizontal, on_vertical) {
                (true, true) => '+',
                (true, false) => '-',
                (false, true) => '|',
                (false, false) => grid.get(row, col).unwrap_or(' '),
            };
            line.push(ch);
        }
        lines.push(line);
    }

    let mut out = lines.join(grid.line_ending());
    if grid.has_trailing_newline() {
        out.push_str(grid.line_ending());
    }
    out
}
