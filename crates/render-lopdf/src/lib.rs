//! Reference PDF composer using lopdf.
//!
//! [`LopdfComposer`] implements the folio composition contract with a naive
//! top-down flow: one PDF page per document page, standard Type1 fonts, greedy
//! word wrapping measured with an average glyph width, and simple rules and
//! rectangles for borders, lines and image placeholders.

mod layout;
mod renderer;

pub use renderer::LopdfComposer;
