use super::header::{Header, parse_header};

/// Classification of a single input line, made without reference to parser state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace only. Separates glyph blocks.
    Blank,
    /// A glyph header.
    Header(Header),
    /// Anything else: a bitmap row candidate.
    Row(&'a str),
}

/// Classifies individual lines for the block state machine.
pub struct GlyphLineClassifier;

impl GlyphLineClassifier {
    /// Classifies a line. Blank detection trims whitespace; headers and rows
    /// are matched against the raw line with any trailing `\r` removed.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return LineClass::Blank;
        }

        match parse_header(line) {
            Some(header) => LineClass::Header(header),
            None => LineClass::Row(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t \r")]
    fn test_blank_lines(#[case] line: &str) {
        assert_eq!(GlyphLineClassifier.classify(line), LineClass::Blank);
    }

    #[test]
    fn test_header_line() {
        assert_eq!(
            GlyphLineClassifier.classify("0x41 'A'\r"),
            LineClass::Header(Header {
                hex_value: 0x41,
                quoted: Some('A')
            })
        );
    }

    #[rstest]
    #[case("@@@@@@@@", "@@@@@@@@")]
    #[case("@......@\r", "@......@")]
    #[case(" @@@@@@@", " @@@@@@@")]
    #[case("0x41 'A", "0x41 'A")]
    fn test_row_candidates(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(GlyphLineClassifier.classify(line), LineClass::Row(expected));
    }
}
