/// A run of consecutive non-blank input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<String>,
}

impl Paragraph {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whitespace-separated words across all lines, in reading order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flat_map(|line| line.split_whitespace())
    }
}

/// Split text on one or more blank lines. Lines holding only whitespace count
/// as blank, so no returned paragraph is empty.
pub fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(Paragraph {
                    lines: std::mem::take(&mut current),
                });
            }
            continue;
        }
        current.push(line.to_string());
    }
    if !current.is_empty() {
        paragraphs.push(Paragraph { lines: current });
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(paragraphs: &[Paragraph]) -> Vec<Vec<&str>> {
        paragraphs
            .iter()
            .map(|p| p.lines().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn splits_on_blank_lines() {
        let paragraphs = split_paragraphs("one\ntwo\n\nthree\n\n\n\nfour");
        assert_eq!(
            texts(&paragraphs),
            vec![vec!["one", "two"], vec!["three"], vec!["four"]]
        );
    }

    #[test]
    fn discards_leading_trailing_and_whitespace_only_blocks() {
        let paragraphs = split_paragraphs("\n\n  \nfirst\n \t \nsecond\r\n\r\n\n");
        assert_eq!(texts(&paragraphs), vec![vec!["first"], vec!["second"]]);
    }

    #[test]
    fn blank_input_has_no_paragraphs() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n \n\t\n").is_empty());
    }

    #[test]
    fn words_span_all_lines() {
        let paragraphs = split_paragraphs("alpha  beta\n gamma\tdelta ");
        let words: Vec<&str> = paragraphs[0].words().collect();
        assert_eq!(words, vec!["alpha", "beta", "gamma", "delta"]);
    }
}
