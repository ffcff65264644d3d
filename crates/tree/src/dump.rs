//! Human-readable tree dump for debugging templates.

use crate::node::Node;
use crate::properties::KindProperties;
use folio_style::{BorderSet, StyleBundle};
use folio_types::{Margins, Property};
use std::fmt::{Debug, Write};

struct Attrs(Vec<String>);

impl Attrs {
    fn prop<T: Debug>(&mut self, name: &str, p: &Property<T>) {
        if let Some(value) = p.get() {
            self.0.push(format!("{name}={value:?}"));
        }
    }

    fn margins(&mut self, m: &Margins) {
        for (side, value) in m.set_sides() {
            self.0.push(format!("{side}Margin={value}"));
        }
    }

    fn borders(&mut self, b: &BorderSet) {
        self.prop("borders", &b.all);
        self.prop("topBorder", &b.top);
        self.prop("rightBorder", &b.right);
        self.prop("bottomBorder", &b.bottom);
        self.prop("leftBorder", &b.left);
    }

    fn style(&mut self, s: &StyleBundle) {
        self.prop("font", &s.font);
        self.prop("fontSize", &s.font_size);
        self.prop("bold", &s.bold);
        self.prop("italic", &s.italic);
        self.prop("underline", &s.underline);
        self.prop("superscript", &s.superscript);
        self.prop("subscript", &s.subscript);
        self.prop("foregroundColor", &s.foreground_color);
        self.prop("backgroundColor", &s.background_color);
        self.prop("horizontalAlignment", &s.horizontal_alignment);
        self.prop("verticalAlignment", &s.vertical_alignment);
        self.prop("textAlignment", &s.text_alignment);
        self.borders(&s.borders);
        self.margins(&s.margins);
    }
}

impl Node {
    /// Renders the subtree as indented lines, one node per line, listing set properties only.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let mut attrs = Attrs(Vec::new());
        attrs.style(&self.style);
        attrs.prop("position", &self.position);
        attrs.prop("text", &self.content.text);
        attrs.prop("property", &self.content.property);
        attrs.prop("format", &self.content.format);
        attrs.prop("formatProperties", &self.content.format_properties);
        if !self.content.raw().is_empty() {
            attrs.0.push(format!("raw={:?}", self.content.raw()));
        }

        match &self.props {
            KindProperties::Root(p) => {
                attrs.prop("pageSize", &p.page_size);
                attrs.prop("orientation", &p.orientation);
                attrs.prop("documentFont", &p.document_font);
                attrs.prop("style", &p.style_sheet);
            }
            KindProperties::List(p) => {
                attrs.prop("startIndex", &p.start_index);
                attrs.prop("indentation", &p.indentation);
                attrs.prop("listSymbol", &p.symbol);
                attrs.prop("preSymbolText", &p.pre_symbol_text);
                attrs.prop("postSymbolText", &p.post_symbol_text);
                attrs.prop("enumeration", &p.enumeration);
            }
            KindProperties::Table(p) => {
                attrs.prop("columnCount", &p.column_count);
                attrs.prop("columnWidths", &p.column_widths);
                attrs.prop("width", &p.width);
                attrs.prop("largeTable", &p.large_table);
                attrs.prop("verticalBorderSpacing", &p.vertical_border_spacing);
                attrs.prop("horizontalBorderSpacing", &p.horizontal_border_spacing);
                attrs.prop("rowHeight", &p.row_height);
            }
            KindProperties::TableRow(p) => {
                attrs.prop("header", &p.header);
                attrs.prop("footer", &p.footer);
                attrs.prop("rowHeight", &p.row_height);
            }
            KindProperties::TableDataRow(p) => {
                attrs.prop("dataSource", &p.data_source);
                attrs.prop("columnCellProperties", &p.column_cell_properties);
                attrs.prop("rowHeight", &p.row_height);
            }
            KindProperties::Cell(p) => {
                attrs.prop("columnSpan", &p.column_span);
                attrs.prop("rowSpan", &p.row_span);
                attrs.prop("enumerate", &p.enumerate);
            }
            KindProperties::Image(p) => {
                attrs.prop("source", &p.source);
                attrs.prop("property", &p.property);
                attrs.prop("left", &p.left);
                attrs.prop("bottom", &p.bottom);
                attrs.prop("width", &p.width);
                attrs.prop("horizontalScaling", &p.horizontal_scaling);
                attrs.prop("verticalScaling", &p.vertical_scaling);
            }
            KindProperties::Line(p) => {
                attrs.prop("length", &p.length);
                attrs.prop("alignment", &p.alignment);
            }
            KindProperties::Spacer(p) => attrs.prop("height", &p.height),
            KindProperties::TextField(p) => {
                attrs.prop("name", &p.name);
                attrs.prop("value", &p.value);
                attrs.prop("property", &p.property);
                attrs.prop("multiline", &p.multiline);
                attrs.prop("width", &p.width);
                attrs.prop("height", &p.height);
            }
            KindProperties::Plain => {}
        }

        let indent = "  ".repeat(depth);
        let _ = if attrs.0.is_empty() {
            writeln!(out, "{indent}{}", self.kind().tag())
        } else {
            writeln!(out, "{indent}{} {}", self.kind().tag(), attrs.0.join(" "))
        };
        for child in self.children() {
            child.dump_into(out, depth + 1);
        }
    }
}
