pub mod builder;
pub mod classify;
pub mod header;

pub use builder::GlyphBuilder;
pub use classify::{GlyphLineClassifier, LineClass};
pub use header::{Header, parse_header};
