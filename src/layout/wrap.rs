use std::fmt;

use serde::{Serialize, Serializer};

use crate::layout::paragraphs::Paragraph;

/// Width used when no explicit wrap width is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// One display line of the flattened document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrappedLine {
    Text(String),
    /// Blank line separating two paragraphs.
    Spacer,
}

impl WrappedLine {
    pub fn as_str(&self) -> &str {
        match self {
            WrappedLine::Text(text) => text,
            WrappedLine::Spacer => "",
        }
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self, WrappedLine::Spacer)
    }
}

impl fmt::Display for WrappedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WrappedLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Greedy word wrap of a single paragraph.
///
/// Words are joined by one space and widths are counted in characters. A word
/// longer than `width` gets a line of its own and is never broken.
pub fn wrap_paragraph(paragraph: &Paragraph, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::with_capacity(width);
    let mut current_chars = 0usize;
    for word in paragraph.words() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= width {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_chars = word_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Flatten paragraphs into display lines, with a [`WrappedLine::Spacer`] before
/// every paragraph but the first.
pub fn wrap_paragraphs(paragraphs: &[Paragraph], width: usize) -> Vec<WrappedLine> {
    let mut out = Vec::new();
    for (idx, paragraph) in paragraphs.iter().enumerate() {
        if idx > 0 {
            out.push(WrappedLine::Spacer);
        }
        out.extend(
            wrap_paragraph(paragraph, width)
                .into_iter()
                .map(WrappedLine::Text),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paragraphs::split_paragraphs;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn strings(lines: &[WrappedLine]) -> Vec<&str> {
        lines.iter().map(WrappedLine::as_str).collect()
    }

    #[test]
    fn inserts_spacer_between_paragraphs_only() {
        let paragraphs = split_paragraphs("Para one line.\n\nPara two line.");
        let lines = wrap_paragraphs(&paragraphs, DEFAULT_WRAP_WIDTH);
        assert_eq!(strings(&lines), vec!["Para one line.", "", "Para two line."]);
        assert!(lines[1].is_spacer());
    }

    #[test]
    fn breaks_before_word_that_would_overflow() {
        let paragraphs = split_paragraphs("the quick brown fox jumps over the lazy dog");
        let lines = wrap_paragraph(&paragraphs[0], 10);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
    }

    #[test]
    fn line_may_fill_width_exactly() {
        let paragraphs = split_paragraphs("abcd efgh ij");
        let lines = wrap_paragraph(&paragraphs[0], 9);
        assert_eq!(lines, vec!["abcd efgh", "ij"]);
    }

    #[test]
    fn long_word_stays_whole_on_its_own_line() {
        let paragraphs = split_paragraphs("a incomprehensibilities b");
        let lines = wrap_paragraph(&paragraphs[0], 8);
        assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let paragraphs = split_paragraphs("caf\u{e9} na\u{ef}ve \u{fc}ber");
        let lines = wrap_paragraph(&paragraphs[0], 10);
        assert_eq!(lines, vec!["caf\u{e9} na\u{ef}ve", "\u{fc}ber"]);
    }

    #[test]
    fn joins_raw_lines_of_a_paragraph() {
        let paragraphs = split_paragraphs("first line\nsecond   line");
        let lines = wrap_paragraph(&paragraphs[0], 70);
        assert_eq!(lines, vec!["first line second line"]);
    }

    #[test]
    fn spacer_serializes_as_empty_string() {
        let lines = vec![WrappedLine::Text("x".into()), WrappedLine::Spacer];
        assert_eq!(serde_json::to_string(&lines).unwrap(), r#"["x",""]"#);
    }

    proptest! {
        #[test]
        fn lines_respect_width_unless_single_long_word(
            words in prop::collection::vec("[a-z]{1,20}", 1..60),
            width in 1usize..40,
        ) {
            let text = words.join(" ");
            let paragraphs = split_paragraphs(&text);
            for line in wrap_paragraph(&paragraphs[0], width) {
                if line.chars().count() > width {
                    prop_assert!(!line.contains(' '));
                }
            }
        }

        #[test]
        fn wrapping_preserves_word_sequence(
            words in prop::collection::vec("[a-zA-Z0-9.,]{1,12}", 1..80),
            width in 1usize..90,
        ) {
            let text = words.join(" ");
            let paragraphs = split_paragraphs(&text);
            let rewrapped: Vec<String> = wrap_paragraph(&paragraphs[0], width)
                .iter()
                .flat_map(|line| line.split(' ').map(str::to_string).collect::<Vec<_>>())
                .collect();
            prop_assert_eq!(rewrapped, words);
        }
    }
}
