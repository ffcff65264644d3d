//! Kind-specific property slots.

use crate::kind::NodeKind;
use folio_style::{HorizontalAlignment, PageOrientation, PageSize};
use folio_types::{Property, UnitValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootProperties {
    pub page_size: Property<PageSize>,
    pub orientation: Property<PageOrientation>,
    pub document_font: Property<String>,
    /// Resource name of an external style sheet.
    pub style_sheet: Property<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProperties {
    pub start_index: Property<u32>,
    pub indentation: Property<f32>,
    pub symbol: Property<String>,
    pub pre_symbol_text: Property<String>,
    pub post_symbol_text: Property<String>,
    pub enumeration: Property<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableProperties {
    pub column_count: Property<u32>,
    pub column_widths: Property<Vec<f32>>,
    pub width: Property<UnitValue>,
    pub large_table: Property<bool>,
    pub vertical_border_spacing: Property<f32>,
    pub horizontal_border_spacing: Property<f32>,
    pub row_height: Property<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowProperties {
    pub header: Property<bool>,
    pub footer: Property<bool>,
    pub row_height: Property<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRowProperties {
    /// Name of the bound field holding the row sequence.
    pub data_source: Property<String>,
    /// Row fields to emit when the row template has no cells.
    pub column_cell_properties: Property<Vec<String>>,
    pub row_height: Property<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellProperties {
    pub column_span: Property<u32>,
    pub row_span: Property<u32>,
    /// Fill the cell with the 1-based row index of a data row.
    pub enumerate: Property<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageProperties {
    pub source: Property<String>,
    /// Bound field holding the image bytes.
    pub property: Property<String>,
    pub left: Property<f32>,
    pub bottom: Property<f32>,
    pub width: Property<f32>,
    pub horizontal_scaling: Property<f32>,
    pub vertical_scaling: Property<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineProperties {
    pub length: Property<f32>,
    pub alignment: Property<HorizontalAlignment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacerProperties {
    pub height: Property<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFieldProperties {
    pub name: Property<String>,
    pub value: Property<String>,
    /// Bound field supplying the initial value.
    pub property: Property<String>,
    pub multiline: Property<bool>,
    pub width: Property<f32>,
    pub height: Property<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KindProperties {
    Root(RootProperties),
    List(ListProperties),
    Table(TableProperties),
    TableRow(RowProperties),
    TableDataRow(DataRowProperties),
    Cell(CellProperties),
    Image(ImageProperties),
    Line(LineProperties),
    Spacer(SpacerProperties),
    TextField(TextFieldProperties),
    /// Kinds whose attributes all come from their traits.
    Plain,
}

impl KindProperties {
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Root => KindProperties::Root(Default::default()),
            NodeKind::List => KindProperties::List(Default::default()),
            NodeKind::Table => KindProperties::Table(Default::default()),
            NodeKind::TableRow => KindProperties::TableRow(Default::default()),
            NodeKind::TableDataRow => KindProperties::TableDataRow(Default::default()),
            NodeKind::Cell => KindProperties::Cell(Default::default()),
            NodeKind::Image => KindProperties::Image(Default::default()),
            NodeKind::Line => KindProperties::Line(Default::default()),
            NodeKind::Spacer => KindProperties::Spacer(Default::default()),
            NodeKind::TextField => KindProperties::TextField(Default::default()),
            NodeKind::Page
            | NodeKind::Header
            | NodeKind::Footer
            | NodeKind::Paragraph
            | NodeKind::Text
            | NodeKind::ListItem => KindProperties::Plain,
        }
    }
}
