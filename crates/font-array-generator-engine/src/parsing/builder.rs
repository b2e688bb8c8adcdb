use std::mem;

use crate::{
    diagnostic::{CodePoint, Diagnostic},
    format::GlyphFormat,
    glyph::{GLYPH_WIDTH, Glyph, GlyphBlock, RowError},
};

use super::classify::LineClass;

#[derive(Debug, Clone)]
enum BlockState {
    /// Waiting for a header.
    Idle,
    Collecting(GlyphBlock),
    /// The current block was invalidated; its remaining rows are dropped.
    Discarding { code_point: u32 },
}

/// Line-at-a-time state machine that turns classified lines into glyphs.
pub struct GlyphBuilder<'f> {
    format: &'f GlyphFormat,
    state: BlockState,
    diagnostics: Vec<Diagnostic>,
}

impl<'f> GlyphBuilder<'f> {
    pub fn new(format: &'f GlyphFormat) -> Self {
        Self {
            format,
            state: BlockState::Idle,
            diagnostics: vec![],
        }
    }

    /// Feeds one line. Returns a glyph when this line completes a valid block.
    pub fn push(&mut self, line_number: usize, class: LineClass<'_>) -> Option<Glyph> {
        match class {
            LineClass::Blank => {
                self.close_at_separator(line_number);
                None
            }
            LineClass::Header(header) => {
                if let Some(character) = header.quoted
                    && header.is_mismatched()
                {
                    self.report(Diagnostic::CharacterMismatch {
                        hex_value: header.hex_value,
                        character,
                        line_number,
                    });
                }
                self.open_block(header.code_point(), line_number);
                None
            }
            LineClass::Row(text) => self.push_row(line_number, text),
        }
    }

    /// Ends the stream. Returns every diagnostic raised during the run, in order.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        // EOF flush
        if let BlockState::Collecting(block) = mem::replace(&mut self.state, BlockState::Idle) {
            if block.row_count() > 0 {
                self.report(Diagnostic::IncompleteAtEndOfInput {
                    code_point: block.code_point,
                    rows: block.row_count(),
                });
            } else {
                log::debug!(
                    "end of input right after header for {}",
                    CodePoint(block.code_point)
                );
            }
        }
        self.diagnostics
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn open_block(&mut self, code_point: u32, line_number: usize) {
        log::debug!("line {line_number}: header for {}", CodePoint(code_point));

        let next = BlockState::Collecting(GlyphBlock::new(code_point, line_number));
        if let BlockState::Collecting(previous) = mem::replace(&mut self.state, next)
            && previous.row_count() > 0
        {
            self.report(Diagnostic::HeaderInterrupted {
                code_point: previous.code_point,
                rows: previous.row_count(),
                new_code_point: code_point,
                line_number,
            });
        }
    }

    fn close_at_separator(&mut self, line_number: usize) {
        match mem::replace(&mut self.state, BlockState::Idle) {
            BlockState::Collecting(block) if block.row_count() > 0 => {
                self.report(Diagnostic::IncompleteBlock {
                    code_point: block.code_point,
                    rows: block.row_count(),
                    line_number,
                });
            }
            BlockState::Collecting(block) => {
                log::debug!(
                    "line {line_number}: blank line right after header for {}",
                    CodePoint(block.code_point)
                );
            }
            BlockState::Idle | BlockState::Discarding { .. } => {}
        }
    }

    fn push_row(&mut self, line_number: usize, text: &str) -> Option<Glyph> {
        let mut block = match mem::replace(&mut self.state, BlockState::Idle) {
            BlockState::Collecting(block) => block,
            BlockState::Idle => {
                self.report(Diagnostic::StrayRow {
                    line_number,
                    text: text.to_string(),
                });
                return None;
            }
            discarding @ BlockState::Discarding { code_point } => {
                log::debug!(
                    "line {line_number}: dropping row of discarded glyph {}",
                    CodePoint(code_point)
                );
                self.state = discarding;
                return None;
            }
        };

        let length = text.chars().count();
        if length != GLYPH_WIDTH {
            self.report(Diagnostic::WrongRowLength {
                code_point: block.code_point,
                line_number,
                text: text.to_string(),
                length,
            });
            self.state = BlockState::Discarding {
                code_point: block.code_point,
            };
            return None;
        }

        block.push_row(line_number, text);
        if !block.is_complete() {
            self.state = BlockState::Collecting(block);
            return None;
        }

        // Complete: validate, then go back to Idle whatever the outcome.
        match Glyph::from_block(&block, self.format) {
            Ok(glyph) => Some(glyph),
            Err(invalid) => {
                let diagnostic = match invalid.error {
                    RowError::InvalidMarker { character, column } => Diagnostic::InvalidMarker {
                        code_point: block.code_point,
                        line_number: invalid.line_number,
                        text: invalid.text,
                        character,
                        column,
                    },
                    RowError::WrongLength(length) => Diagnostic::WrongRowLength {
                        code_point: block.code_point,
                        line_number: invalid.line_number,
                        text: invalid.text,
                        length,
                    },
                };
                self.report(diagnostic);
                None
            }
        }
    }
}
