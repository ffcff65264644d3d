//! Style bundles and the per-document style sheet.

use crate::border::BorderSet;
use crate::symbols::SymbolTable;
use crate::text::{HorizontalAlignment, TextAlignment, VerticalAlignment};
use folio_types::{Color, Margins, Property};
use serde::Serialize;
use std::collections::HashMap;

/// A set of optionally-assigned style values.
///
/// The same type holds a node's locally-set style, a named style-sheet section,
/// and the effective style computed during rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleBundle {
    // Font & Text
    pub font: Property<String>,
    pub font_size: Property<f32>,
    pub bold: Property<bool>,
    pub italic: Property<bool>,
    pub underline: Property<bool>,
    pub superscript: Property<bool>,
    pub subscript: Property<bool>,
    pub foreground_color: Property<Color>,
    pub background_color: Property<Color>,
    pub horizontal_alignment: Property<HorizontalAlignment>,
    pub vertical_alignment: Property<VerticalAlignment>,
    pub text_alignment: Property<TextAlignment>,

    // Box
    pub borders: BorderSet,
    /// Never inherited from ancestors.
    pub margins: Margins,
}

impl StyleBundle {
    /// Merges this bundle over `base`; every slot set here wins.
    pub fn over(&self, base: &StyleBundle) -> StyleBundle {
        StyleBundle {
            font: self.font.over(&base.font),
            font_size: self.font_size.over(&base.font_size),
            bold: self.bold.over(&base.bold),
            italic: self.italic.over(&base.italic),
            underline: self.underline.over(&base.underline),
            superscript: self.superscript.over(&base.superscript),
            subscript: self.subscript.over(&base.subscript),
            foreground_color: self.foreground_color.over(&base.foreground_color),
            background_color: self.background_color.over(&base.background_color),
            horizontal_alignment: self.horizontal_alignment.over(&base.horizontal_alignment),
            vertical_alignment: self.vertical_alignment.over(&base.vertical_alignment),
            text_alignment: self.text_alignment.over(&base.text_alignment),
            borders: self.borders.over(&base.borders),
            margins: self.margins.over(&base.margins),
        }
    }

    /// The part of this bundle that descendants inherit.
    pub fn inheritable(&self) -> StyleBundle {
        StyleBundle {
            margins: Margins::default(),
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == StyleBundle::default()
    }
}

/// Style-sheet sections; each one styles a single element kind.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum StyleSection {
    Paragraph,
    Table,
    TableCell,
    ListItem,
    Line,
}

impl StyleSection {
    pub const ALL: [StyleSection; 5] = [
        StyleSection::Paragraph,
        StyleSection::Table,
        StyleSection::TableCell,
        StyleSection::ListItem,
        StyleSection::Line,
    ];

    pub fn element_name(&self) -> &'static str {
        match self {
            StyleSection::Paragraph => "ParagraphStyle",
            StyleSection::Table => "TableStyle",
            StyleSection::TableCell => "TableCellStyle",
            StyleSection::ListItem => "ListItemStyle",
            StyleSection::Line => "LineStyle",
        }
    }

    pub fn from_element_name(name: &str) -> Option<StyleSection> {
        StyleSection::ALL
            .into_iter()
            .find(|section| section.element_name() == name)
    }
}

/// Everything a document's style blocks declare. Built once per parse, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStyle {
    pub symbols: SymbolTable,
    sections: HashMap<StyleSection, StyleBundle>,
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section bundle. A repeated section is merged over the earlier one.
    pub fn add_section(&mut self, section: StyleSection, bundle: StyleBundle) {
        let merged = match self.sections.get(&section) {
            Some(existing) => bundle.over(existing),
            None => bundle,
        };
        self.sections.insert(section, merged);
    }

    pub fn section(&self, section: StyleSection) -> Option<&StyleBundle> {
        self.sections.get(&section)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Side;

    #[test]
    fn test_over_order() {
        let mut inherited = StyleBundle::default();
        inherited.font_size.set(10.0);
        inherited.bold.set(true);
        let mut named = StyleBundle::default();
        named.font_size.set(8.0);
        let mut local = StyleBundle::default();
        local.font_size.set(12.0);

        let effective = local.over(&named.over(&inherited));
        assert_eq!(effective.font_size.get(), Some(&12.0));
        assert_eq!(effective.bold.get(), Some(&true));

        let effective = StyleBundle::default().over(&named.over(&inherited));
        assert_eq!(effective.font_size.get(), Some(&8.0));
    }

    #[test]
    fn test_margins_are_not_inheritable() {
        let mut parent = StyleBundle::default();
        parent.margins.set_side(Side::Left, 30.0);
        parent.italic.set(true);
        let inherited = parent.inheritable();
        assert!(inherited.margins.is_empty());
        assert_eq!(inherited.italic.get(), Some(&true));
    }

    #[test]
    fn test_repeated_section_merges() {
        let mut style = DocumentStyle::new();
        let mut first = StyleBundle::default();
        first.font_size.set(8.0);
        first.bold.set(true);
        style.add_section(StyleSection::TableCell, first);

        let mut second = StyleBundle::default();
        second.font_size.set(9.0);
        style.add_section(StyleSection::TableCell, second);

        let bundle = style.section(StyleSection::TableCell).unwrap();
        assert_eq!(bundle.font_size.get(), Some(&9.0));
        assert_eq!(bundle.bold.get(), Some(&true));
    }

    #[test]
    fn test_section_names() {
        assert_eq!(
            StyleSection::from_element_name("TableCellStyle"),
            Some(StyleSection::TableCell)
        );
        assert_eq!(StyleSection::from_element_name("CellStyle"), None);
    }
}
