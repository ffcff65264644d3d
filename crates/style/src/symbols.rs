//! Named colors and fonts declared by a document's style sheet.

use folio_types::Color;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Raw bytes of a font file.
pub type FontData = Arc<Vec<u8>>;

/// The standard Type1 fonts every composer is expected to know.
pub const STANDARD_FONTS: &[&str] = &[
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Symbol",
    "ZapfDingbats",
];

/// Symbols are owned by one parse session and passed explicitly to the value parsers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    // keyed by lowercase name
    colors: HashMap<String, Color>,
    fonts: BTreeMap<String, FontData>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named color. Later registrations replace earlier ones.
    pub fn register_color(&mut self, name: &str, color: Color) {
        self.colors.insert(name.to_lowercase(), color);
    }

    /// Case-insensitive color lookup.
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(&name.to_lowercase()).copied()
    }

    pub fn register_font(&mut self, name: impl Into<String>, data: FontData) {
        self.fonts.insert(name.into(), data);
    }

    /// True if `name` is a registered custom font or a standard font.
    pub fn has_font(&self, name: &str) -> bool {
        self.fonts.contains_key(name) || STANDARD_FONTS.contains(&name)
    }

    pub fn custom_font(&self, name: &str) -> Option<&FontData> {
        self.fonts.get(name)
    }

    /// Custom fonts in name order.
    pub fn custom_fonts(&self) -> impl Iterator<Item = (&str, &FontData)> {
        self.fonts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }
}
