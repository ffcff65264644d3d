use crate::error::ComposeError;
use crate::types::{
    CellContent, DocumentSetup, ImageContent, LineContent, ListContent, ParagraphContent,
    Placement, Region, RegionContent, RowSetup, TableSetup, TextFieldContent,
};
use folio_types::Side;

/// The page-composition engine the render driver delegates to.
///
/// Calls arrive in document order. A document is opened exactly once, every
/// `start_table` is matched by an `end_table`, and `close_document` is last.
pub trait DocumentComposer {
    fn open_document(&mut self, setup: &DocumentSetup) -> Result<(), ComposeError>;

    /// Sets all four page margins at once. Issued only when every side is known.
    fn set_margins(&mut self, top: f32, right: f32, bottom: f32, left: f32)
    -> Result<(), ComposeError>;

    fn set_margin(&mut self, side: Side, value: f32) -> Result<(), ComposeError>;

    fn add_region(&mut self, region: Region, content: &RegionContent) -> Result<(), ComposeError>;

    fn add_paragraph(
        &mut self,
        paragraph: &ParagraphContent,
        placement: &Placement,
    ) -> Result<(), ComposeError>;

    fn add_list(&mut self, list: &ListContent) -> Result<(), ComposeError>;

    fn start_table(&mut self, table: &TableSetup, placement: &Placement)
    -> Result<(), ComposeError>;

    fn start_row(&mut self, row: &RowSetup) -> Result<(), ComposeError>;

    /// Header and footer cells belong to the table's repeating header/footer
    /// band and are not preceded by `start_row`.
    fn add_cell(&mut self, cell: &CellContent) -> Result<(), ComposeError>;

    fn end_table(&mut self) -> Result<(), ComposeError>;

    fn add_image(&mut self, image: &ImageContent, placement: &Placement)
    -> Result<(), ComposeError>;

    fn add_line(&mut self, line: &LineContent) -> Result<(), ComposeError>;

    fn add_text_field(
        &mut self,
        field: &TextFieldContent,
        placement: &Placement,
    ) -> Result<(), ComposeError>;

    fn page_break(&mut self) -> Result<(), ComposeError>;

    fn close_document(&mut self) -> Result<(), ComposeError>;
}
