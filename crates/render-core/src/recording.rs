use crate::error::ComposeError;
use crate::traits::DocumentComposer;
use crate::types::{
    CellContent, DocumentSetup, ImageContent, LineContent, ListContent, ParagraphContent,
    Placement, Region, RegionContent, RowSetup, TableSetup, TextFieldContent,
};
use folio_types::Side;
use serde::Serialize;

/// One call received by a [`RecordingComposer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum CompositionCall {
    OpenDocument(DocumentSetup),
    SetMargins {
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    },
    SetMargin { side: Side, value: f32 },
    AddRegion { region: Region, content: RegionContent },
    AddParagraph {
        paragraph: ParagraphContent,
        placement: Placement,
    },
    AddList(ListContent),
    StartTable { table: TableSetup, placement: Placement },
    StartRow(RowSetup),
    AddCell(CellContent),
    EndTable,
    AddImage { image: ImageContent, placement: Placement },
    AddLine(LineContent),
    AddTextField {
        field: TextFieldContent,
        placement: Placement,
    },
    PageBreak,
    CloseDocument,
}

impl CompositionCall {
    pub fn name(&self) -> &'static str {
        match self {
            CompositionCall::OpenDocument(_) => "open_document",
            CompositionCall::SetMargins { .. } => "set_margins",
            CompositionCall::SetMargin { .. } => "set_margin",
            CompositionCall::AddRegion { .. } => "add_region",
            CompositionCall::AddParagraph { .. } => "add_paragraph",
            CompositionCall::AddList(_) => "add_list",
            CompositionCall::StartTable { .. } => "start_table",
            CompositionCall::StartRow(_) => "start_row",
            CompositionCall::AddCell(_) => "add_cell",
            CompositionCall::EndTable => "end_table",
            CompositionCall::AddImage { .. } => "add_image",
            CompositionCall::AddLine(_) => "add_line",
            CompositionCall::AddTextField { .. } => "add_text_field",
            CompositionCall::PageBreak => "page_break",
            CompositionCall::CloseDocument => "close_document",
        }
    }
}

/// A composer that records every call and checks the call protocol.
#[derive(Debug, Default)]
pub struct RecordingComposer {
    calls: Vec<CompositionCall>,
    open: bool,
    closed: bool,
    table_depth: usize,
}

impl RecordingComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[CompositionCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<CompositionCall> {
        self.calls
    }

    /// The call names in order.
    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.iter().map(CompositionCall::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| c.name() == name).count()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &ParagraphContent> {
        self.calls.iter().filter_map(|c| match c {
            CompositionCall::AddParagraph { paragraph, .. } => Some(paragraph),
            _ => None,
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellContent> {
        self.calls.iter().filter_map(|c| match c {
            CompositionCall::AddCell(cell) => Some(cell),
            _ => None,
        })
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn record(&mut self, call: CompositionCall) -> Result<(), ComposeError> {
        let name = call.name();
        let out_of_order = |reason: &str| ComposeError::OutOfOrder {
            call: name,
            reason: reason.to_string(),
        };
        match &call {
            CompositionCall::OpenDocument(_) if self.open || self.closed => {
                return Err(out_of_order("document already opened"));
            }
            CompositionCall::OpenDocument(_) => self.open = true,
            _ if !self.open => return Err(out_of_order("document is not open")),
            CompositionCall::StartTable { .. } => self.table_depth += 1,
            CompositionCall::StartRow(_) | CompositionCall::AddCell(_) if self.table_depth == 0 => {
                return Err(out_of_order("no table started"));
            }
            CompositionCall::EndTable if self.table_depth == 0 => {
                return Err(out_of_order("no table started"));
            }
            CompositionCall::EndTable => self.table_depth -= 1,
            CompositionCall::CloseDocument if self.table_depth > 0 => {
                return Err(out_of_order("a table is still open"));
            }
            CompositionCall::CloseDocument => {
                self.open = false;
                self.closed = true;
            }
            _ => {}
        }
        log::trace!("composition call: {}", name);
        self.calls.push(call);
        Ok(())
    }
}

impl DocumentComposer for RecordingComposer {
    fn open_document(&mut self, setup: &DocumentSetup) -> Result<(), ComposeError> {
        self.record(CompositionCall::OpenDocument(setup.clone()))
    }

    fn set_margins(
        &mut self,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    ) -> Result<(), ComposeError> {
        self.record(CompositionCall::SetMargins {
            top,
            right,
            bottom,
            left,
        })
    }

    fn set_margin(&mut self, side: Side, value: f32) -> Result<(), ComposeError> {
        self.record(CompositionCall::SetMargin { side, value })
    }

    fn add_region(&mut self, region: Region, content: &RegionContent) -> Result<(), ComposeError> {
        self.record(CompositionCall::AddRegion {
            region,
            content: content.clone(),
        })
    }

    fn add_paragraph(
        &mut self,
        paragraph: &ParagraphContent,
        placement: &Placement,
    ) -> Result<(), ComposeError> {
        self.record(CompositionCall::AddParagraph {
            paragraph: paragraph.clone(),
            placement: placement.clone(),
        })
    }

    fn add_list(&mut self, list: &ListContent) -> Result<(), ComposeError> {
        self.record(CompositionCall::AddList(list.clone()))
    }

    fn start_table(
        &mut self,
        table: &TableSetup,
        placement: &Placement,
    ) -> Result<(), ComposeError> {
        self.record(CompositionCall::StartTable {
            table: table.clone(),
            placement: placement.clone(),
        })
    }

    fn start_row(&mut self, row: &RowSetup) -> Result<(), ComposeError> {
        self.record(CompositionCall::StartRow(row.clone()))
    }

    fn add_cell(&mut self, cell: &CellContent) -> Result<(), ComposeError> {
        self.record(CompositionCall::AddCell(cell.clone()))
    }

    fn end_table(&mut self) -> Result<(), ComposeError> {
        self.record(CompositionCall::EndTable)
    }

    fn add_image(
        &mut self,
        image: &ImageContent,
        placement: &Placement,
    ) -> Result<(), ComposeError> {
        self.record(CompositionCall::AddImage {
            image: image.clone(),
            placement: placement.clone(),
        })
    }

    fn add_line(&mut self, line: &LineContent) -> Result<(), ComposeError> {
        self.record(CompositionCall::AddLine(line.clone()))
    }

    fn add_text_field(
        &mut self,
        field: &TextFieldContent,
        placement: &Placement,
    ) -> Result<(), ComposeError> {
        self.record(CompositionCall::AddTextField {
            field: field.clone(),
            placement: placement.clone(),
        })
    }

    fn page_break(&mut self) -> Result<(), ComposeError> {
        self.record(CompositionCall::PageBreak)
    }

    fn close_document(&mut self) -> Result<(), ComposeError> {
        self.record(CompositionCall::CloseDocument)
    }
}
