//! Greedy word wrapping.

/// Wrap text at word boundaries, greedily filling each line up to
/// `columns` characters.
///
/// Lines break only at whitespace; a word is never split. A single word
/// longer than `columns` stands alone on a line that exceeds the limit.
/// The returned iterator is lazy; collecting it yields the wrapped lines
/// in order.
pub fn wrap_text(text: &str, columns: usize) -> WrappedLines<'_> {
    WrappedLines {
        words: text.split_whitespace(),
        carry: None,
        columns,
    }
}

/// Lazy iterator over greedily wrapped lines.
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    words: std::str::SplitWhitespace<'a>,
    carry: Option<&'a str>,
    columns: usize,
}

impl Iterator for WrappedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.carry.take().or_else(|| self.words.next())?;
        let mut line = String::from(first);

        for word in self.words.by_ref() {
            if line.len() + 1 + word.len() <= self.columns {
                line.push(' ');
                line.push_str(word);
            } else {
                self.carry = Some(word);
                break;
            }
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "The String global object is a constructor for strings, or a sequence of characters.";

    #[test]
    fn wraps_at_twenty_six_columns() {
        let lines: Vec<String> = wrap_text(SAMPLE, 26).collect();
        assert_eq!(
            lines,
            vec![
                "The String global object",
                "is a constructor for",
                "strings, or a sequence of",
                "characters.",
            ]
        );
    }

    #[test]
    fn wraps_at_twelve_columns() {
        let lines: Vec<String> = wrap_text(SAMPLE, 12).collect();
        assert_eq!(
            lines,
            vec![
                "The String",
                "global",
                "object is a",
                "constructor",
                "for strings,",
                "or a",
                "sequence of",
                "characters.",
            ]
        );
    }

    #[test]
    fn every_line_fits_unless_a_single_word_is_too_long() {
        for line in wrap_text(SAMPLE, 26) {
            assert!(line.len() <= 26, "line too long: {line:?}");
        }
    }

    #[test]
    fn overlong_word_stands_alone() {
        let lines: Vec<String> = wrap_text("a extraordinarily b", 6).collect();
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert_eq!(wrap_text("", 10).count(), 0);
        assert_eq!(wrap_text("   ", 10).count(), 0);
    }

    #[test]
    fn single_word_fits() {
        let lines: Vec<String> = wrap_text("hello", 10).collect();
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn iterator_is_lazy_and_resumable() {
        let mut lines = wrap_text(SAMPLE, 26);
        assert_eq!(lines.next().as_deref(), Some("The String global object"));
        assert_eq!(lines.next().as_deref(), Some("is a constructor for"));
    }
}
