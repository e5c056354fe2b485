use std::collections::HashMap;

/// Maps characters outside the output alphabet onto ASCII replacements.
///
/// `None` means the character has no replacement and is dropped.
pub trait Transliteration {
    fn name(&self) -> &'static str;
    fn map_char(&self, ch: char) -> Option<&str>;
}

/// Typographic punctuation folded down to plain ASCII.
///
/// - single quotes and primes: `'`
/// - double quotes, guillemets and double primes: `"`
/// - hyphen, dash and minus forms: `-`
/// - horizontal ellipsis: `...`
/// - no-break, typographic and ideographic spaces: a plain space
/// - line separator: `\n`; paragraph separator: a blank line
///
/// Every other non-ASCII character has no mapping.
pub struct AsciiPunctuation {
    map: HashMap<char, &'static str>,
}

impl Default for AsciiPunctuation {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiPunctuation {
    pub fn new() -> Self {
        let mut m = HashMap::new();

        for ch in ['\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}', '\u{2032}'] {
            m.insert(ch, "'");
        }
        for ch in [
            '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{2033}', '\u{00AB}', '\u{00BB}',
        ] {
            m.insert(ch, "\"");
        }
        for ch in [
            '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
        ] {
            m.insert(ch, "-");
        }
        m.insert('\u{2026}', "...");
        for ch in ['\u{00A0}', '\u{202F}', '\u{205F}', '\u{3000}'] {
            m.insert(ch, " ");
        }
        for ch in '\u{2000}'..='\u{200A}' {
            m.insert(ch, " ");
        }
        m.insert('\u{2028}', "\n");
        m.insert('\u{2029}', "\n\n");

        Self { map: m }
    }
}

impl Transliteration for AsciiPunctuation {
    fn name(&self) -> &'static str {
        "ascii-punctuation"
    }

    fn map_char(&self, ch: char) -> Option<&str> {
        self.map.get(&ch).copied()
    }
}

/// Fold `text` into ASCII using `table`; unmapped non-ASCII characters vanish.
pub fn normalize_with<T: Transliteration + ?Sized>(table: &T, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else if let Some(replacement) = table.map_char(ch) {
            out.push_str(replacement);
        }
    }
    out
}

/// Normalize with the built-in [`AsciiPunctuation`] table.
pub fn normalize(text: &str) -> String {
    normalize_with(&AsciiPunctuation::new(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_curly_quotes_dashes_and_ellipsis() {
        let out = normalize("\u{201C}Wait\u{2026}\u{201D} she said \u{2014} it\u{2019}s fine");
        assert_eq!(out, "\"Wait...\" she said - it's fine");
    }

    #[test]
    fn drops_unmapped_characters() {
        assert_eq!(normalize("caf\u{00E9} \u{1F600}ok\u{FFFD}"), "caf ok");
    }

    #[test]
    fn output_is_always_ascii() {
        let input = "\u{00A0}\u{2013}\u{00AB}x\u{00BB}\u{4E2D}\u{6587}\t\r\n";
        let out = normalize(input);
        assert!(out.is_ascii());
        assert_eq!(out, " -\"x\"\t\r\n");
    }

    #[test]
    fn unicode_spaces_and_separators_keep_words_apart() {
        assert_eq!(normalize("a\u{2028}b"), "a\nb");
        assert_eq!(normalize("one\u{2029}two"), "one\n\ntwo");
        let spaces = [
            '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{200A}', '\u{3000}',
        ];
        for space in spaces {
            let out = normalize(&format!("a{space}b"));
            assert_eq!(out, "a b", "U+{:04X}", space as u32);
        }
    }

    #[test]
    fn paragraph_separator_starts_a_new_paragraph() {
        let text = normalize("one\u{2029}two");
        let paragraphs = crate::layout::paragraphs::split_paragraphs(&text);
        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn ascii_passes_through_unchanged() {
        let text = "Plain 'ASCII' text - with \"quotes\"...\n\nand lines.";
        assert_eq!(normalize(text), text);
    }
}
