use crate::{
    format::GlyphFormat,
    glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph},
};

/// Renders one bitmap row as its trailing-comment picture.
pub fn render_row_picture(bits: u8, format: &GlyphFormat) -> String {
    (0..GLYPH_WIDTH)
        .rev()
        .map(|bit| {
            if bits & (1 << bit) != 0 {
                format.filled_glyph
            } else {
                format.empty_glyph
            }
        })
        .collect()
}

/// Renders a complete `const` declaration for a glyph, including the trailing blank line.
pub fn render_declaration(glyph: &Glyph, format: &GlyphFormat) -> String {
    let mut out = format!(
        "const {}: [u8; {GLYPH_HEIGHT}] = [\n",
        format.identifier(glyph.code_point)
    );
    for bits in glyph.rows {
        out.push_str(&format!(
            "    0b{bits:08b}, // {}\n",
            render_row_picture(bits, format)
        ));
    }
    out.push_str("];\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_row_picture() {
        let format = GlyphFormat::default();
        assert_eq!(render_row_picture(0b1000_0001, &format), "*      *");
        assert_eq!(render_row_picture(0xFF, &format), "********");
        assert_eq!(render_row_picture(0x00, &format), "        ");
    }

    #[test]
    fn test_render_declaration() {
        let mut rows = [0x81u8; GLYPH_HEIGHT];
        rows[0] = 0xFF;
        rows[15] = 0x18;
        let glyph = Glyph {
            code_point: 0x41,
            rows,
        };

        let rendered = render_declaration(&glyph, &GlyphFormat::default());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 1 + GLYPH_HEIGHT + 2);
        assert_eq!(lines[0], "const K_FONT_HEX_41: [u8; 16] = [");
        assert_eq!(lines[1], "    0b11111111, // ********");
        assert_eq!(lines[2], "    0b10000001, // *      *");
        assert_eq!(lines[16], "    0b00011000, //    **   ");
        assert_eq!(lines[17], "];");
        assert_eq!(lines[18], "");
        assert!(rendered.ends_with("];\n\n"));
    }

    #[test]
    fn test_render_declaration_custom_format() {
        let format = GlyphFormat {
            filled_glyph: '#',
            empty_glyph: '.',
            identifier_prefix: "FONT_".to_string(),
            ..GlyphFormat::default()
        };
        let glyph = Glyph {
            code_point: 0x9,
            rows: [0xF0; GLYPH_HEIGHT],
        };

        let rendered = render_declaration(&glyph, &format);

        assert!(rendered.starts_with("const FONT_HEX_09: [u8; 16] = [\n"));
        assert!(rendered.contains("    0b11110000, // ####....\n"));
    }
}
