use std::fmt;

use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Formats a code point as `'A' (0x41)`, or just `0x0A` when it has no visible form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePoint(pub u32);

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match char::from_u32(self.0) {
            Some(c) if !c.is_control() && !c.is_whitespace() => write!(f, "'{c}' (0x{:X})", self.0),
            _ => write!(f, "0x{:X}", self.0),
        }
    }
}

/// Recoverable problem in the input. The affected block is dropped and parsing carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    IncompleteBlock {
        code_point: u32,
        rows: usize,
        line_number: usize,
    },
    IncompleteAtEndOfInput {
        code_point: u32,
        rows: usize,
    },
    HeaderInterrupted {
        code_point: u32,
        rows: usize,
        new_code_point: u32,
        line_number: usize,
    },
    WrongRowLength {
        code_point: u32,
        line_number: usize,
        text: String,
        length: usize,
    },
    InvalidMarker {
        code_point: u32,
        line_number: usize,
        text: String,
        character: char,
        column: usize,
    },
    StrayRow {
        line_number: usize,
        text: String,
    },
    CharacterMismatch {
        hex_value: u32,
        character: char,
        line_number: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IncompleteBlock {
                code_point,
                rows,
                line_number,
            } => write!(
                f,
                "glyph {} has only {rows} of {GLYPH_HEIGHT} bitmap rows at the blank line on line {line_number}; skipping it",
                CodePoint(*code_point)
            ),
            Diagnostic::IncompleteAtEndOfInput { code_point, rows } => write!(
                f,
                "end of input reached but glyph {} has only {rows} of {GLYPH_HEIGHT} bitmap rows; skipping it",
                CodePoint(*code_point)
            ),
            Diagnostic::HeaderInterrupted {
                code_point,
                rows,
                new_code_point,
                line_number,
            } => write!(
                f,
                "new header for {} on line {line_number} interrupts glyph {} after {rows} rows; discarding the earlier glyph",
                CodePoint(*new_code_point),
                CodePoint(*code_point)
            ),
            Diagnostic::WrongRowLength {
                code_point,
                line_number,
                text,
                length,
            } => write!(
                f,
                "bitmap row for glyph {} on line {line_number} ({text:?}) has {length} characters instead of {GLYPH_WIDTH}; skipping the glyph",
                CodePoint(*code_point)
            ),
            Diagnostic::InvalidMarker {
                code_point,
                line_number,
                text,
                character,
                column,
            } => write!(
                f,
                "bitmap row for glyph {} on line {line_number} ({text:?}) contains invalid character {character:?} at column {column}; skipping the glyph",
                CodePoint(*code_point)
            ),
            Diagnostic::StrayRow { line_number, text } => write!(
                f,
                "line {line_number} ({text:?}) is outside any glyph block; ignoring it"
            ),
            Diagnostic::CharacterMismatch {
                hex_value,
                character,
                line_number,
            } => write!(
                f,
                "header on line {line_number} says 0x{hex_value:X} but quotes {character:?}; using the quoted character"
            ),
        }
    }
}

impl Diagnostic {
    /// Whether this diagnostic means a glyph was dropped from the output.
    pub fn discards_block(&self) -> bool {
        !matches!(
            self,
            Diagnostic::StrayRow { .. } | Diagnostic::CharacterMismatch { .. }
        )
    }
}
