//! Digit-string OCR decoding.
//!
//! Decodes account numbers scanned as three rows of pipes and
//! underscores, each digit a fixed 3x3 glyph:
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```

/// The ten digit glyphs, each flattened to its 9 characters row by row.
const DIGIT_GLYPHS: [&str; 10] = [
    " _ | ||_|",
    "     |  |",
    " _  _||_ ",
    " _  _| _|",
    "   |_|  |",
    " _ |_  _|",
    " _ |_ |_|",
    " _   |  |",
    " _ |_||_|",
    " _ |_| _|",
];

/// Parse a 3-row ASCII digit blob into its base-10 value.
///
/// Empty lines are ignored, so a trailing line break is fine. Returns
/// `None` if the blob does not have exactly three equally long rows whose
/// width is a multiple of three, or if any 3x3 cell matches no digit
/// glyph.
pub fn parse_account_number(text: &str) -> Option<u64> {
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.is_empty()).collect();
    let [top, middle, bottom] = lines.as_slice() else {
        return None;
    };

    let width = top.len();
    if width % 3 != 0 || middle.len() != width || bottom.len() != width {
        return None;
    }

    let mut value: u64 = 0;
    for i in 0..width / 3 {
        let (start, end) = (i * 3, i * 3 + 3);
        let glyph = format!(
            "{}{}{}",
            &top[start..end],
            &middle[start..end],
            &bottom[start..end]
        );
        let digit = DIGIT_GLYPHS.iter().position(|g| *g == glyph)?;
        value = value * 10 + digit as u64;
    }
    Some(value)
}
