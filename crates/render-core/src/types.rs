use folio_style::{
    BorderInfo, FontData, HorizontalAlignment, PageOrientation, PageSize, TextAlignment,
    VerticalAlignment,
};
use folio_types::{Color, FixedPosition, Margins, Side, UnitValue};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Document-level settings handed over at open.
#[derive(Clone, PartialEq, Serialize)]
pub struct DocumentSetup {
    pub page_size: PageSize,
    pub orientation: PageOrientation,
    pub document_font: String,
    /// Custom fonts registered by the style sheet, by name.
    #[serde(serialize_with = "font_names")]
    pub fonts: Vec<(String, FontData)>,
}

fn font_names<S: serde::Serializer>(
    fonts: &[(String, FontData)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(fonts.iter().map(|(name, _)| name))
}

impl fmt::Debug for DocumentSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentSetup")
            .field("page_size", &self.page_size)
            .field("orientation", &self.orientation)
            .field("document_font", &self.document_font)
            .field(
                "fonts",
                &self.fonts.iter().map(|(n, d)| (n, d.len())).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The effective border of each side after the cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedBorders {
    pub top: Option<BorderInfo>,
    pub right: Option<BorderInfo>,
    pub bottom: Option<BorderInfo>,
    pub left: Option<BorderInfo>,
}

impl ResolvedBorders {
    pub fn side(&self, side: Side) -> Option<&BorderInfo> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Left => self.left.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|s| self.side(*s).is_none())
    }
}

/// Flat, fully resolved style of one content call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProperties {
    pub font: String,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Baseline shift in points; positive for superscript.
    pub text_rise: f32,
    pub foreground_color: Color,
    pub background_color: Option<Color>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub text_alignment: Option<TextAlignment>,
    pub borders: ResolvedBorders,
    /// Only the sides set on the element itself.
    pub margins: Margins,
}

impl Default for StyleProperties {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            font_size: 10.0,
            bold: false,
            italic: false,
            underline: false,
            text_rise: 0.0,
            foreground_color: Color::BLACK,
            background_color: None,
            horizontal_alignment: None,
            vertical_alignment: None,
            text_alignment: None,
            borders: ResolvedBorders::default(),
            margins: Margins::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Placement {
    Flow,
    Fixed(FixedPosition),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub style: StyleProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphContent {
    pub runs: Vec<TextRun>,
    pub style: StyleProperties,
}

impl ParagraphContent {
    /// The text of all runs, separated by single spaces.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpacerContent {
    pub height: Option<f32>,
    pub margins: Margins,
}

/// Content nested inside a cell, header or footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Paragraph(ParagraphContent),
    Spacer(SpacerContent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    Header,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionContent {
    pub style: StyleProperties,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItemContent {
    pub text: String,
    pub style: StyleProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListContent {
    /// Decimal numbering instead of a symbol.
    pub numbered: bool,
    pub start_index: Option<u32>,
    pub symbol: Option<String>,
    pub indentation: Option<f32>,
    pub pre_symbol_text: Option<String>,
    pub post_symbol_text: Option<String>,
    pub style: StyleProperties,
    pub items: Vec<ListItemContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSetup {
    /// Relative column widths; one entry per column.
    pub column_widths: Vec<f32>,
    pub width: UnitValue,
    pub large_table: bool,
    pub vertical_border_spacing: Option<f32>,
    pub horizontal_border_spacing: Option<f32>,
    pub style: StyleProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSetup {
    pub height: Option<f32>,
    pub style: StyleProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellRole {
    Header,
    Footer,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellContent {
    pub role: CellRole,
    pub column_span: u32,
    pub row_span: u32,
    pub height: Option<f32>,
    /// The cell's own text; empty when it only holds blocks.
    pub text: String,
    pub blocks: Vec<Block>,
    pub style: StyleProperties,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct ImageContent {
    #[serde(skip)]
    pub data: Arc<Vec<u8>>,
    /// Where the bytes came from, for diagnostics.
    pub origin: String,
    pub left: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub horizontal_scaling: f32,
    pub vertical_scaling: f32,
    pub style: StyleProperties,
}

impl fmt::Debug for ImageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageContent")
            .field("origin", &self.origin)
            .field("bytes", &self.data.len())
            .field("left", &self.left)
            .field("bottom", &self.bottom)
            .field("width", &self.width)
            .field("horizontal_scaling", &self.horizontal_scaling)
            .field("vertical_scaling", &self.vertical_scaling)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineContent {
    pub length: Option<f32>,
    pub alignment: Option<HorizontalAlignment>,
    pub style: StyleProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFieldContent {
    pub name: Option<String>,
    pub value: String,
    pub multiline: bool,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub style: StyleProperties,
}
