use std::sync::OnceLock;

use regex::Regex;

/// A parsed `0xHH 'C'` or bare `0xHH` header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Value of the hex field.
    pub hex_value: u32,
    /// The quoted character, absent for the bare form.
    pub quoted: Option<char>,
}

impl Header {
    /// Code point the glyph is stored under. The quoted character takes precedence.
    pub fn code_point(&self) -> u32 {
        self.quoted.map_or(self.hex_value, u32::from)
    }

    /// Whether the quoted character disagrees with the hex field.
    pub fn is_mismatched(&self) -> bool {
        self.quoted.is_some_and(|c| u32::from(c) != self.hex_value)
    }
}

fn header_regex() -> &'static Regex {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADER_REGEX.get_or_init(|| {
        Regex::new(r"^0x(?P<hex>[0-9A-Fa-f]+)(?:[ \t]*'(?P<ch>.)(?P<close>')?)?")
            .expect("Invalid header regex")
    })
}

/// Parses a header line.
///
/// The quoted form `0x%x '%c'` is tried first. When the hex field parses but no
/// quoted character can be read, the line falls back to the bare `0x%x` form.
/// A quoted character without its closing quote means the line is not a header.
/// Text after a complete header is ignored.
pub fn parse_header(line: &str) -> Option<Header> {
    let caps = header_regex().captures(line)?;
    let hex_value = u32::from_str_radix(&caps["hex"], 16).ok()?;

    match (caps.name("ch"), caps.name("close")) {
        (Some(ch), Some(_)) => Some(Header {
            hex_value,
            quoted: ch.as_str().chars().next(),
        }),
        (Some(_), None) => None,
        (None, _) => Some(Header {
            hex_value,
            quoted: None,
        }),
    }
}
