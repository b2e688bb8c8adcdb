/// Characters and naming used when reading bitmap rows and writing declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFormat {
    /// Input marker for a set pixel.
    pub filled_marker: char,
    /// Input marker for an unset pixel.
    pub empty_marker: char,
    /// Character drawn in the trailing comment for a set pixel.
    pub filled_glyph: char,
    /// Character drawn in the trailing comment for an unset pixel.
    pub empty_glyph: char,
    /// Prepended to `HEX_<code point>` to form the constant name.
    pub identifier_prefix: String,
}

impl Default for GlyphFormat {
    fn default() -> Self {
        Self {
            filled_marker: '@',
            empty_marker: '.',
            filled_glyph: '*',
            empty_glyph: ' ',
            identifier_prefix: "K_FONT_".to_string(),
        }
    }
}

impl GlyphFormat {
    /// Constant name for a code point, e.g. `K_FONT_HEX_41`.
    pub fn identifier(&self, code_point: u32) -> String {
        format!("{}{}", self.identifier_prefix, identifier_suffix(code_point))
    }
}

/// `HEX_` followed by the code point in uppercase hex, at least two digits.
pub fn identifier_suffix(code_point: u32) -> String {
    format!("HEX_{code_point:02X}")
}
