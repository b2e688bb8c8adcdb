pub mod diagnostic;
pub mod emit;
pub mod format;
pub mod glyph;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use diagnostic::*;
pub use emit::*;
pub use format::*;
pub use glyph::*;
pub use io::*;
pub use parsing::{GlyphBuilder, GlyphLineClassifier, Header, LineClass};
