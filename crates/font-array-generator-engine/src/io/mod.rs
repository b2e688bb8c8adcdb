use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{
    diagnostic::Diagnostic,
    emit::render_declaration,
    format::GlyphFormat,
    parsing::{GlyphBuilder, GlyphLineClassifier},
};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to open input file '{path}': {source}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create output file '{path}': {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read input at line {line_number}: {source}")]
    Read {
        line_number: usize,
        source: std::io::Error,
    },
    #[error("Failed to write glyph declaration: {0}")]
    Write(#[source] std::io::Error),
    #[error("Failed to flush output: {0}")]
    Flush(#[source] std::io::Error),
}

/// Outcome of a successful run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub glyphs_written: usize,
    pub blocks_discarded: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts a glyph description stream into declarations.
///
/// Each declaration is written only once its block has fully validated, so a
/// discarded block leaves nothing behind in `writer`. The writer is flushed
/// before returning.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    format: &GlyphFormat,
) -> Result<Report, GenerateError> {
    let classifier = GlyphLineClassifier;
    let mut builder = GlyphBuilder::new(format);
    let mut glyphs_written = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.map_err(|source| GenerateError::Read {
            line_number,
            source,
        })?;

        if let Some(glyph) = builder.push(line_number, classifier.classify(&line)) {
            writer
                .write_all(render_declaration(&glyph, format).as_bytes())
                .map_err(GenerateError::Write)?;
            glyphs_written += 1;
        }
    }

    let diagnostics = builder.finish();
    writer.flush().map_err(GenerateError::Flush)?;

    Ok(Report {
        glyphs_written,
        blocks_discarded: diagnostics.iter().filter(|d| d.discards_block()).count(),
        diagnostics,
    })
}

/// Converts `input` into a newly created (or truncated) `output` file.
pub fn convert_file(
    input: &Path,
    output: &Path,
    format: &GlyphFormat,
) -> Result<Report, GenerateError> {
    let reader = File::open(input).map_err(|source| GenerateError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| GenerateError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!(
        "Converting '{}' into '{}'",
        input.display(),
        output.display()
    );

    let report = convert(BufReader::new(reader), BufWriter::new(writer), format)?;

    log::info!(
        "Wrote {} glyphs, discarded {} blocks",
        report.glyphs_written,
        report.blocks_discarded
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts every write but cannot flush.
    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("device gone"))
        }
    }

    fn full_block(header: &str) -> String {
        let mut s = format!("{header}\n");
        for _ in 0..16 {
            s.push_str("@......@\n");
        }
        s
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let input = full_block("0x41 'A'");
        let result = convert(Cursor::new(input), FailingWriter, &GlyphFormat::default());

        assert!(matches!(result, Err(GenerateError::Write(_))));
    }

    #[test]
    fn test_flush_failure_is_fatal() {
        let input = full_block("0x41 'A'");
        let result = convert(
            Cursor::new(input),
            UnflushableWriter(vec![]),
            &GlyphFormat::default(),
        );

        assert!(matches!(result, Err(GenerateError::Flush(_))));
    }

    #[test]
    fn test_nothing_written_means_no_write_failure() {
        let result = convert(
            Cursor::new("0x41 'A'\n@@@\n"),
            FailingWriter,
            &GlyphFormat::default(),
        )
        .unwrap();

        assert_eq!(result.glyphs_written, 0);
        assert_eq!(result.blocks_discarded, 1);
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let input: &[u8] = b"0x41 'A'\n\xff\xfe\n";
        let result = convert(input, Vec::new(), &GlyphFormat::default());

        assert!(matches!(
            result,
            Err(GenerateError::Read { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_report_counts() {
        let mut input = full_block("0x41 'A'");
        input.push('\n');
        input.push_str("0x42 'B'\n@@@@@@@@\n\n");
        input.push_str(&full_block("0x43 'C'"));

        let mut out = Vec::new();
        let report = convert(Cursor::new(input), &mut out, &GlyphFormat::default()).unwrap();

        assert_eq!(report.glyphs_written, 2);
        assert_eq!(report.blocks_discarded, 1);
        assert_eq!(report.diagnostics.len(), 1);
    }
}
