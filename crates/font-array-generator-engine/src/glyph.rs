use crate::format::GlyphFormat;

/// Pixels per bitmap row.
pub const GLYPH_WIDTH: usize = 8;
/// Bitmap rows per glyph.
pub const GLYPH_HEIGHT: usize = 16;

/// One candidate bitmap row and the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapRow {
    pub line_number: usize,
    pub text: String,
}

/// A glyph whose header has been read and whose rows are still arriving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBlock {
    pub code_point: u32,
    pub header_line: usize,
    rows: Vec<BitmapRow>,
}

impl GlyphBlock {
    pub fn new(code_point: u32, header_line: usize) -> Self {
        Self {
            code_point,
            header_line,
            rows: Vec::with_capacity(GLYPH_HEIGHT),
        }
    }

    pub fn push_row(&mut self, line_number: usize, text: &str) {
        self.rows.push(BitmapRow {
            line_number,
            text: text.to_string(),
        });
    }

    pub fn rows(&self) -> &[BitmapRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_complete(&self) -> bool {
        self.rows.len() == GLYPH_HEIGHT
    }
}

/// A fully validated glyph. Bit 7 of each row is the leftmost pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub code_point: u32,
    pub rows: [u8; GLYPH_HEIGHT],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("row has {0} characters, expected 8")]
    WrongLength(usize),
    #[error("invalid character {character:?} at column {column}")]
    InvalidMarker { character: char, column: usize },
}

/// Row failure located in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRow {
    pub line_number: usize,
    pub text: String,
    pub error: RowError,
}

/// Decodes one row of markers into its bit pattern.
pub fn decode_row(text: &str, format: &GlyphFormat) -> Result<u8, RowError> {
    let len = text.chars().count();
    if len != GLYPH_WIDTH {
        return Err(RowError::WrongLength(len));
    }

    let mut bits = 0u8;
    for (idx, character) in text.chars().enumerate() {
        bits <<= 1;
        if character == format.filled_marker {
            bits |= 1;
        } else if character != format.empty_marker {
            return Err(RowError::InvalidMarker {
                character,
                column: idx + 1,
            });
        }
    }
    Ok(bits)
}

impl Glyph {
    /// Validates every row of a complete block. Stops at the first bad row.
    pub fn from_block(block: &GlyphBlock, format: &GlyphFormat) -> Result<Self, InvalidRow> {
        let mut rows = [0u8; GLYPH_HEIGHT];
        for (slot, row) in rows.iter_mut().zip(block.rows()) {
            *slot = decode_row(&row.text, format).map_err(|error| InvalidRow {
                line_number: row.line_number,
                text: row.text.clone(),
                error,
            })?;
        }
        Ok(Self {
            code_point: block.code_point,
            rows,
        })
    }
}
