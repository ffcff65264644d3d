//! Effective style of a node during the render walk.

use super::defaults::RenderDefaults;
use folio_render_core::{ResolvedBorders, StyleProperties};
use folio_style::{DocumentStyle, StyleBundle};
use folio_tree::Node;
use folio_types::Side;

/// Combines, later wins: what `node` inherits from its ancestors, the style-sheet
/// section of its kind, and its locally-set properties.
///
/// Margins are never inherited; a named section can still supply them.
pub fn effective_style(inherited: &StyleBundle, node: &Node, sheet: &DocumentStyle) -> StyleBundle {
    let base = inherited.inheritable();
    let named = node
        .kind()
        .style_section()
        .and_then(|section| sheet.section(section));
    match named {
        Some(named) => node.style.over(&named.over(&base)),
        None => node.style.over(&base),
    }
}

/// Flattens a bundle into the property bag handed to the composer.
pub fn resolve_style(bundle: &StyleBundle, defaults: &RenderDefaults, document_font: &str) -> StyleProperties {
    let superscript = bundle.superscript.value_or(false);
    let subscript = bundle.subscript.value_or(false);
    let (font_size, text_rise) = if superscript {
        (defaults.small_font_size, defaults.text_rise)
    } else if subscript {
        (defaults.small_font_size, -defaults.text_rise)
    } else {
        (bundle.font_size.value_or(defaults.font_size), 0.0)
    };
    let border = |side| bundle.borders.effective(side).cloned();

    StyleProperties {
        font: bundle
            .font
            .get()
            .cloned()
            .unwrap_or_else(|| document_font.to_string()),
        font_size,
        bold: bundle.bold.value_or(false),
        italic: bundle.italic.value_or(false),
        underline: bundle.underline.value_or(false),
        text_rise,
        foreground_color: bundle.foreground_color.value_or(folio_types::Color::BLACK),
        background_color: bundle.background_color.get().copied(),
        horizontal_alignment: bundle.horizontal_alignment.get().copied(),
        vertical_alignment: bundle.vertical_alignment.get().copied(),
        text_alignment: bundle.text_alignment.get().copied(),
        borders: ResolvedBorders {
            top: border(Side::Top),
            right: border(Side::Right),
            bottom: border(Side::Bottom),
            left: border(Side::Left),
        },
        margins: bundle.margins.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::{BorderInfo, StyleSection};
    use folio_tree::NodeKind;
    use folio_types::Color;

    fn sheet_with_cell_font_size(size: f32) -> DocumentStyle {
        let mut sheet = DocumentStyle::new();
        let mut cell = StyleBundle::default();
        cell.font_size.set(size);
        sheet.add_section(StyleSection::TableCell, cell);
        sheet
    }

    #[test]
    fn test_local_beats_named_beats_inherited() {
        let sheet = sheet_with_cell_font_size(8.0);
        let mut inherited = StyleBundle::default();
        inherited.font_size.set(20.0);
        inherited.bold.set(true);

        let mut cell = Node::new(NodeKind::Cell);
        assert_eq!(effective_style(&inherited, &cell, &sheet).font_size.get(), Some(&8.0));

        cell.style.font_size.set(12.0);
        let style = effective_style(&inherited, &cell, &sheet);
        assert_eq!(style.font_size.get(), Some(&12.0));
        assert_eq!(style.bold.get(), Some(&true));

        let paragraph = Node::new(NodeKind::Paragraph);
        assert_eq!(effective_style(&inherited, &paragraph, &sheet).font_size.get(), Some(&20.0));
    }

    #[test]
    fn test_ancestor_side_border_reaches_descendant() {
        let thin = BorderInfo::solid(1.0, Color::BLACK);
        let sheet = DocumentStyle::new();
        let mut page = Node::new(NodeKind::Page);
        page.style.borders.top.set(thin.clone());

        let page_style = effective_style(&StyleBundle::default(), &page, &sheet);
        let paragraph = Node::new(NodeKind::Paragraph);
        let style = resolve_style(
            &effective_style(&page_style, &paragraph, &sheet),
            &RenderDefaults::default(),
            "Helvetica",
        );
        assert_eq!(style.borders.top, Some(thin.clone()));
        assert_eq!(style.borders.bottom, None);
        assert_eq!(style.borders.left, None);

        let mut own = Node::new(NodeKind::Paragraph);
        let thick = BorderInfo::solid(3.0, Color::BLACK);
        own.style.borders.left.set(thick.clone());
        let style = effective_style(&page_style, &own, &sheet);
        assert_eq!(style.borders.top.get(), Some(&thin));
        assert_eq!(style.borders.left.get(), Some(&thick));
    }

    #[test]
    fn test_all_sides_border_wins_outright() {
        let sheet = DocumentStyle::new();
        let mut inherited = StyleBundle::default();
        inherited.borders.top.set(BorderInfo::solid(1.0, Color::BLACK));
        let mut node = Node::new(NodeKind::Paragraph);
        node.style.borders.all.set(BorderInfo::none());

        let style = resolve_style(
            &effective_style(&inherited, &node, &sheet),
            &RenderDefaults::default(),
            "Helvetica",
        );
        assert_eq!(style.borders.top, Some(BorderInfo::none()));
    }

    #[test]
    fn test_margins_are_not_inherited() {
        let sheet = DocumentStyle::new();
        let mut inherited = StyleBundle::default();
        inherited.margins.set_side(Side::Top, 5.0);
        let style = effective_style(&inherited, &Node::new(NodeKind::Paragraph), &sheet);
        assert!(style.margins.is_empty());
    }

    #[test]
    fn test_defaults_and_superscript() {
        let defaults = RenderDefaults::default();
        let mut bundle = StyleBundle::default();
        let plain = resolve_style(&bundle, &defaults, "Times-Roman");
        assert_eq!(plain.font, "Times-Roman");
        assert_eq!(plain.font_size, 10.0);
        assert_eq!(plain.foreground_color, Color::BLACK);

        bundle.font_size.set(14.0);
        bundle.superscript.set(true);
        let sup = resolve_style(&bundle, &defaults, "Helvetica");
        assert_eq!((sup.font_size, sup.text_rise), (6.0, 4.0));

        bundle.superscript.set(false);
        bundle.subscript.set(true);
        let sub = resolve_style(&bundle, &defaults, "Helvetica");
        assert_eq!((sub.font_size, sub.text_rise), (6.0, -4.0));
    }
}
