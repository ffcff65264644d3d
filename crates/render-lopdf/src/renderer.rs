use crate::layout::{LINE_SPACING, LaidLine, encode_win_ansi, layout_runs, measure};
use folio_render_core::utils::{flip_y, styled_font_name};
use folio_render_core::{
    Block, CellContent, CellRole, ComposeError, DocumentComposer, DocumentSetup, ImageContent,
    LineContent, ListContent, ParagraphContent, Placement, Region, RegionContent, RowSetup,
    StyleProperties, TableSetup, TextFieldContent,
};
use folio_style::symbols::STANDARD_FONTS;
use folio_style::{BorderInfo, BorderStyle, HorizontalAlignment, TextAlignment};
use folio_types::{Color, Side};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::{BTreeMap, HashSet};
use std::io::Write;

const DEFAULT_MARGIN: f32 = 36.0;
const CELL_PADDING: f32 = 2.0;
const DEFAULT_LIST_SYMBOL: &str = "-";
const DEFAULT_LIST_INDENT: f32 = 12.0;

#[derive(Debug, Clone, Copy)]
struct PageMargins {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

struct PageState {
    operations: Vec<Operation>,
    /// Distance of the flow cursor from the top edge.
    cursor: f32,
    has_content: bool,
}

struct TableState {
    x: f32,
    columns: Vec<f32>,
    band: Vec<CellContent>,
    pending: Vec<CellContent>,
    pending_height: Option<f32>,
}

/// An in-memory PDF composer using the `lopdf` library.
/// It builds the document's object graph and writes it to `writer` on close.
pub struct LopdfComposer<W: Write> {
    writer: W,
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    /// Type1 base font name to resource key.
    fonts: BTreeMap<String, String>,
    custom_fonts: HashSet<String>,
    document_font: String,
    page_width: f32,
    page_height: f32,
    margins: PageMargins,
    header: Option<RegionContent>,
    footer: Option<RegionContent>,
    page: Option<PageState>,
    table: Option<TableState>,
    opened: bool,
    closed: bool,
}

impl<W: Write> LopdfComposer<W> {
    pub fn new(writer: W) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        let (page_width, page_height) = folio_style::PageSize::default().dimensions_pt();

        Self {
            writer,
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts: BTreeMap::new(),
            custom_fonts: HashSet::new(),
            document_font: "Helvetica".to_string(),
            page_width,
            page_height,
            margins: PageMargins {
                top: DEFAULT_MARGIN,
                right: DEFAULT_MARGIN,
                bottom: DEFAULT_MARGIN,
                left: DEFAULT_MARGIN,
            },
            header: None,
            footer: None,
            page: None,
            table: None,
            opened: false,
            closed: false,
        }
    }

    /// Returns the writer once the document has been closed.
    pub fn into_inner(self) -> Result<W, ComposeError> {
        if self.closed {
            Ok(self.writer)
        } else {
            Err(ComposeError::OutOfOrder {
                call: "into_inner",
                reason: "document not closed".into(),
            })
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn require_open(&self, call: &'static str) -> Result<(), ComposeError> {
        if self.opened && !self.closed {
            Ok(())
        } else {
            Err(ComposeError::OutOfOrder {
                call,
                reason: "document is not open".into(),
            })
        }
    }

    fn content_width(&self) -> f32 {
        self.page_width - self.margins.left - self.margins.right
    }

    fn font_key(&mut self, style: &StyleProperties) -> String {
        let requested = if style.font.is_empty() {
            self.document_font.clone()
        } else {
            style.font.clone()
        };
        let family = if STANDARD_FONTS.contains(&requested.as_str()) {
            requested.as_str()
        } else {
            if self.custom_fonts.insert(requested.clone()) {
                log::debug!(
                    "Font '{}' is not a standard Type1 font; drawing with Helvetica",
                    requested
                );
            }
            "Helvetica"
        };
        let base = styled_font_name(family, style.bold, style.italic);
        let next = format!("F{}", self.fonts.len() + 1);
        self.fonts.entry(base).or_insert(next).clone()
    }

    fn ensure_page(&mut self) -> &mut PageState {
        let top = self.margins.top;
        self.page.get_or_insert_with(|| PageState {
            operations: Vec::new(),
            cursor: top,
            has_content: false,
        })
    }

    fn push_ops(&mut self, ops: Vec<Operation>) {
        let page = self.ensure_page();
        page.operations.extend(ops);
        page.has_content = true;
    }

    /// Reserves `height` points of flow space and returns the top of the reserved band.
    fn reserve(&mut self, height: f32) -> Result<f32, ComposeError> {
        let limit = self.page_height - self.margins.bottom;
        let overflows = self
            .page
            .as_ref()
            .is_some_and(|p| p.has_content && p.cursor + height > limit);
        if overflows {
            self.finish_page()?;
        }
        let page = self.ensure_page();
        let top = page.cursor;
        page.cursor += height;
        Ok(top)
    }

    fn finish_page(&mut self) -> Result<(), ComposeError> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let mut operations = page.operations;
        if let Some(header) = self.header.clone() {
            operations.extend(self.region_ops(&header, self.margins.top * 0.3));
        }
        if let Some(footer) = self.footer.clone() {
            let top = self.page_height - self.margins.bottom * 0.7;
            operations.extend(self.region_ops(&footer, top));
        }

        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| ComposeError::Pdf(e.to_string()))?;
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), encoded));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.page_width.into(), self.page_height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("Finished page {}", self.page_ids.len());
        Ok(())
    }

    fn region_ops(&mut self, region: &RegionContent, top: f32) -> Vec<Operation> {
        let x = self.margins.left;
        let width = self.content_width();
        let mut ops = Vec::new();
        let mut y = top;
        for block in &region.blocks {
            match block {
                Block::Paragraph(p) => {
                    let lines = paragraph_lines(p, width);
                    for line in &lines {
                        ops.extend(self.line_ops(line, x, y, width, &p.style));
                        y += line.height;
                    }
                }
                Block::Spacer(s) => y += s.height.unwrap_or(0.0),
            }
        }
        ops
    }

    fn text_ops(&mut self, text: &str, x: f32, baseline: f32, style: &StyleProperties) -> Vec<Operation> {
        let key = self.font_key(style);
        let (r, g, b) = style.foreground_color.to_unit();
        let pdf_y = flip_y(baseline, self.page_height);
        let mut ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("rg", vec![r.into(), g.into(), b.into()]),
            Operation::new("Tf", vec![Object::Name(key.into_bytes()), style.font_size.into()]),
        ];
        if style.text_rise != 0.0 {
            ops.push(Operation::new("Ts", vec![style.text_rise.into()]));
        }
        ops.push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(text))],
        ));
        ops.push(Operation::new("ET", vec![]));

        if style.underline {
            let width = measure(text, style.font_size);
            let y = pdf_y - style.font_size * 0.1;
            ops.extend(rule_ops(x, y, x + width, y, 0.5, style.foreground_color, BorderStyle::Solid));
        }
        ops
    }

    fn line_ops(
        &mut self,
        line: &LaidLine<'_>,
        x: f32,
        top: f32,
        width: f32,
        style: &StyleProperties,
    ) -> Vec<Operation> {
        let offset = match (style.text_alignment, style.horizontal_alignment) {
            (Some(TextAlignment::Right), _) | (None, Some(HorizontalAlignment::Right)) => {
                width - line.width
            }
            (Some(TextAlignment::Center), _) | (None, Some(HorizontalAlignment::Center)) => {
                (width - line.width) / 2.0
            }
            _ => 0.0,
        };
        let baseline = top + line.height * 0.8;
        let mut ops = Vec::new();
        for word in &line.words {
            ops.extend(self.text_ops(word.text, x + offset + word.x, baseline, word.style));
        }
        ops
    }

    fn box_ops(&self, x: f32, top: f32, width: f32, height: f32, style: &StyleProperties) -> Vec<Operation> {
        let mut ops = Vec::new();
        let bottom = flip_y(top + height, self.page_height);
        let upper = flip_y(top, self.page_height);
        if let Some(bg) = style.background_color {
            let (r, g, b) = bg.to_unit();
            ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            ops.push(Operation::new(
                "re",
                vec![x.into(), bottom.into(), width.into(), height.into()],
            ));
            ops.push(Operation::new("f", vec![]));
        }
        for side in Side::ALL {
            let Some(border) = style.borders.side(side).filter(|b| b.is_visible()) else {
                continue;
            };
            let (x1, y1, x2, y2) = match side {
                Side::Top => (x, upper, x + width, upper),
                Side::Bottom => (x, bottom, x + width, bottom),
                Side::Left => (x, bottom, x, upper),
                Side::Right => (x + width, bottom, x + width, upper),
            };
            ops.extend(border_ops(x1, y1, x2, y2, border));
        }
        ops
    }

    fn flow_box(&self, placement: &Placement) -> (f32, f32, Option<f32>) {
        match placement {
            Placement::Flow => (self.margins.left, self.content_width(), None),
            Placement::Fixed(pos) => {
                if let Some(page) = pos.page {
                    let current = self.page_ids.len() as u32 + 1;
                    if page != current {
                        log::debug!(
                            "Fixed position targets page {} but is drawn on page {}",
                            page,
                            current
                        );
                    }
                }
                (pos.x, pos.width.resolve(self.content_width()), Some(pos.y))
            }
        }
    }

    /// Draws a block of laid-out lines, either in flow or at a fixed top.
    fn draw_lines(
        &mut self,
        lines: &[LaidLine<'_>],
        style: &StyleProperties,
        x: f32,
        width: f32,
        fixed_top: Option<f32>,
    ) -> Result<(), ComposeError> {
        let margin_top = style.margins.top.value_or(0.0);
        let margin_bottom = style.margins.bottom.value_or(0.0);
        let margin_left = style.margins.left.value_or(0.0);
        let margin_right = style.margins.right.value_or(0.0);
        let text_height: f32 = lines.iter().map(|l| l.height).sum();
        let height = text_height.max(style.font_size * LINE_SPACING);

        let top = match fixed_top {
            Some(top) => top,
            None => self.reserve(margin_top + height + margin_bottom)? + margin_top,
        };
        let inner_x = x + margin_left;
        let inner_width = width - margin_left - margin_right;

        let mut ops = self.box_ops(inner_x, top, inner_width, height, style);
        let mut y = top;
        for line in lines {
            ops.extend(self.line_ops(line, inner_x, y, inner_width, style));
            y += line.height;
        }
        self.push_ops(ops);
        Ok(())
    }

    fn flush_row(&mut self, header_band: bool) -> Result<(), ComposeError> {
        let Some(table) = self.table.as_mut() else {
            return Ok(());
        };
        let cells = if header_band {
            std::mem::take(&mut table.band)
        } else {
            std::mem::take(&mut table.pending)
        };
        if cells.is_empty() {
            return Ok(());
        }
        let x0 = table.x;
        let columns = table.columns.clone();
        let row_height = if header_band { None } else { table.pending_height.take() };

        let mut placed = Vec::new();
        let mut column = 0usize;
        for cell in &cells {
            let span = (cell.column_span.max(1) as usize).min(columns.len().saturating_sub(column).max(1));
            let x = x0 + columns[..column.min(columns.len())].iter().sum::<f32>();
            let width: f32 = columns.iter().skip(column).take(span).sum();
            let width = if width > 0.0 { width } else { columns.last().copied().unwrap_or(0.0) };
            column += span;
            placed.push((cell, x, width));
        }

        let mut laid = Vec::new();
        let mut height = row_height.unwrap_or(0.0);
        for (cell, x, width) in &placed {
            let lines = cell_lines(cell, width - 2.0 * CELL_PADDING);
            let text_height: f32 = lines.iter().map(|l| l.height).sum();
            height = height
                .max(cell.height.unwrap_or(0.0))
                .max(text_height + 2.0 * CELL_PADDING);
            laid.push((*cell, *x, *width, lines));
        }

        let top = self.reserve(height)?;
        let mut ops = Vec::new();
        for (cell, x, width, lines) in &laid {
            ops.extend(self.box_ops(*x, top, *width, height, &cell.style));
            let mut y = top + CELL_PADDING;
            for line in lines {
                let style = line.words.first().map(|w| w.style).unwrap_or(&cell.style);
                ops.extend(self.line_ops(line, x + CELL_PADDING, y, width - 2.0 * CELL_PADDING, style));
                y += line.height;
            }
        }
        self.push_ops(ops);
        Ok(())
    }
}

fn paragraph_lines(paragraph: &ParagraphContent, width: f32) -> Vec<LaidLine<'_>> {
    let runs: Vec<(&str, &StyleProperties)> = paragraph
        .runs
        .iter()
        .map(|r| (r.text.as_str(), &r.style))
        .collect();
    layout_runs(&runs, width)
}

fn cell_lines(cell: &CellContent, width: f32) -> Vec<LaidLine<'_>> {
    let mut lines = layout_runs(&[(cell.text.as_str(), &cell.style)], width);
    for block in &cell.blocks {
        if let Block::Paragraph(p) = block {
            lines.extend(paragraph_lines(p, width));
        }
    }
    lines
}

fn rule_ops(x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color, style: BorderStyle) -> Vec<Operation> {
    let (r, g, b) = color.to_unit();
    let dash: Vec<Object> = match style {
        BorderStyle::Dashed => vec![3.into(), 3.into()],
        BorderStyle::Dotted | BorderStyle::RoundDots => vec![1.into(), 2.into()],
        _ => vec![],
    };
    let dashed = !dash.is_empty();
    let mut ops = vec![
        Operation::new("q", vec![]),
        Operation::new("w", vec![width.into()]),
        Operation::new("RG", vec![r.into(), g.into(), b.into()]),
    ];
    if dashed {
        ops.push(Operation::new("d", vec![dash.into(), 0.into()]));
    }
    ops.extend([
        Operation::new("m", vec![x1.into(), y1.into()]),
        Operation::new("l", vec![x2.into(), y2.into()]),
        Operation::new("S", vec![]),
        Operation::new("Q", vec![]),
    ]);
    ops
}

fn border_ops(x1: f32, y1: f32, x2: f32, y2: f32, border: &BorderInfo) -> Vec<Operation> {
    rule_ops(x1, y1, x2, y2, border.width, border.color, border.style)
}

impl<W: Write> DocumentComposer for LopdfComposer<W> {
    fn open_document(&mut self, setup: &DocumentSetup) -> Result<(), ComposeError> {
        if self.opened {
            return Err(ComposeError::OutOfOrder {
                call: "open_document",
                reason: "document already opened".into(),
            });
        }
        self.opened = true;
        let (width, height) = setup.page_size.oriented_pt(setup.orientation);
        self.page_width = width;
        self.page_height = height;
        self.document_font = setup.document_font.clone();
        for (name, data) in &setup.fonts {
            log::debug!(
                "Custom font '{}' ({} bytes) is not embedded by the reference composer",
                name,
                data.len()
            );
        }
        Ok(())
    }

    fn set_margins(&mut self, top: f32, right: f32, bottom: f32, left: f32) -> Result<(), ComposeError> {
        self.require_open("set_margins")?;
        self.margins = PageMargins { top, right, bottom, left };
        Ok(())
    }

    fn set_margin(&mut self, side: Side, value: f32) -> Result<(), ComposeError> {
        self.require_open("set_margin")?;
        match side {
            Side::Top => self.margins.top = value,
            Side::Right => self.margins.right = value,
            Side::Bottom => self.margins.bottom = value,
            Side::Left => self.margins.left = value,
        }
        Ok(())
    }

    fn add_region(&mut self, region: Region, content: &RegionContent) -> Result<(), ComposeError> {
        self.require_open("add_region")?;
        match region {
            Region::Header => self.header = Some(content.clone()),
            Region::Footer => self.footer = Some(content.clone()),
        }
        Ok(())
    }

    fn add_paragraph(&mut self, paragraph: &ParagraphContent, placement: &Placement) -> Result<(), ComposeError> {
        self.require_open("add_paragraph")?;
        let (x, width, fixed_top) = self.flow_box(placement);
        let lines = paragraph_lines(paragraph, width);
        self.draw_lines(&lines, &paragraph.style, x, width, fixed_top)
    }

    fn add_list(&mut self, list: &ListContent) -> Result<(), ComposeError> {
        self.require_open("add_list")?;
        let x = self.margins.left + list.style.margins.left.value_or(0.0);
        let indent = list.indentation.unwrap_or(DEFAULT_LIST_INDENT);
        let width = self.content_width() - indent;
        let start = list.start_index.unwrap_or(1);

        for (i, item) in list.items.iter().enumerate() {
            let marker = if list.numbered {
                (start as usize + i).to_string()
            } else {
                list.symbol.clone().unwrap_or_else(|| DEFAULT_LIST_SYMBOL.to_string())
            };
            let marker = format!(
                "{}{}{}",
                list.pre_symbol_text.as_deref().unwrap_or(""),
                marker,
                list.post_symbol_text.as_deref().unwrap_or("")
            );
            let lines = layout_runs(&[(item.text.as_str(), &item.style)], width);
            let height = lines
                .iter()
                .map(|l| l.height)
                .sum::<f32>()
                .max(item.style.font_size * LINE_SPACING);
            let top = self.reserve(height)?;
            let mut ops = self.text_ops(&marker, x, top + item.style.font_size * LINE_SPACING * 0.8, &item.style);
            let mut y = top;
            for line in &lines {
                ops.extend(self.line_ops(line, x + indent, y, width, &item.style));
                y += line.height;
            }
            self.push_ops(ops);
        }
        Ok(())
    }

    fn start_table(&mut self, table: &TableSetup, placement: &Placement) -> Result<(), ComposeError> {
        self.require_open("start_table")?;
        let (x, available, fixed_top) = self.flow_box(placement);
        if fixed_top.is_some() {
            log::debug!("Fixed table placement is drawn in flow by the reference composer");
        }
        let total = table.width.resolve(available);
        let weights: Vec<f32> = if table.column_widths.is_empty() {
            vec![1.0]
        } else {
            table.column_widths.clone()
        };
        let sum: f32 = weights.iter().sum();
        let columns = weights
            .iter()
            .map(|w| if sum > 0.0 { w / sum * total } else { total / weights.len() as f32 })
            .collect();
        self.table = Some(TableState {
            x,
            columns,
            band: Vec::new(),
            pending: Vec::new(),
            pending_height: None,
        });
        Ok(())
    }

    fn start_row(&mut self, row: &RowSetup) -> Result<(), ComposeError> {
        self.require_open("start_row")?;
        self.flush_row(true)?;
        self.flush_row(false)?;
        let table = self.table.as_mut().ok_or(ComposeError::OutOfOrder {
            call: "start_row",
            reason: "no table started".into(),
        })?;
        table.pending_height = row.height;
        Ok(())
    }

    fn add_cell(&mut self, cell: &CellContent) -> Result<(), ComposeError> {
        self.require_open("add_cell")?;
        let table = self.table.as_mut().ok_or(ComposeError::OutOfOrder {
            call: "add_cell",
            reason: "no table started".into(),
        })?;
        match cell.role {
            CellRole::Header | CellRole::Footer => table.band.push(cell.clone()),
            CellRole::Body => table.pending.push(cell.clone()),
        }
        Ok(())
    }

    fn end_table(&mut self) -> Result<(), ComposeError> {
        self.require_open("end_table")?;
        if self.table.is_none() {
            return Err(ComposeError::OutOfOrder {
                call: "end_table",
                reason: "no table started".into(),
            });
        }
        self.flush_row(true)?;
        self.flush_row(false)?;
        self.table = None;
        Ok(())
    }

    fn add_image(&mut self, image: &ImageContent, placement: &Placement) -> Result<(), ComposeError> {
        self.require_open("add_image")?;
        log::debug!(
            "Drawing placeholder for image '{}' ({} bytes)",
            image.origin,
            image.data.len()
        );
        let (x, available, fixed_top) = self.flow_box(placement);
        let width = image.width.unwrap_or(available.min(100.0)) * image.horizontal_scaling;
        let height = image.width.unwrap_or(available.min(100.0)) * image.vertical_scaling;
        let x = x + image.left.unwrap_or(0.0);
        let top = match fixed_top {
            Some(top) => top,
            None => self.reserve(height + image.bottom.unwrap_or(0.0))?,
        };
        let bottom = flip_y(top + height, self.page_height);
        let mut ops = self.box_ops(x, top, width, height, &image.style);
        ops.extend([
            Operation::new("q", vec![]),
            Operation::new("w", vec![0.5.into()]),
            Operation::new("RG", vec![0.6.into(), 0.6.into(), 0.6.into()]),
            Operation::new("re", vec![x.into(), bottom.into(), width.into(), height.into()]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
        self.push_ops(ops);
        Ok(())
    }

    fn add_line(&mut self, line: &LineContent) -> Result<(), ComposeError> {
        self.require_open("add_line")?;
        let available = self.content_width();
        let length = line.length.unwrap_or(available).min(available);
        let x = self.margins.left
            + match line.alignment {
                Some(HorizontalAlignment::Center) => (available - length) / 2.0,
                Some(HorizontalAlignment::Right) => available - length,
                _ => 0.0,
            };
        let margin_top = line.style.margins.top.value_or(0.0);
        let margin_bottom = line.style.margins.bottom.value_or(0.0);
        let border = line
            .style
            .borders
            .bottom
            .clone()
            .or_else(|| line.style.borders.top.clone())
            .unwrap_or_else(|| BorderInfo::solid(1.0, line.style.foreground_color));
        let top = self.reserve(margin_top + border.width + margin_bottom)? + margin_top;
        let y = flip_y(top, self.page_height);
        let ops = if border.is_visible() {
            border_ops(x, y, x + length, y, &border)
        } else {
            Vec::new()
        };
        self.push_ops(ops);
        Ok(())
    }

    fn add_text_field(&mut self, field: &TextFieldContent, placement: &Placement) -> Result<(), ComposeError> {
        self.require_open("add_text_field")?;
        let (x, available, fixed_top) = self.flow_box(placement);
        let width = field.width.unwrap_or(available);
        let height = field
            .height
            .unwrap_or(field.style.font_size * LINE_SPACING + 2.0 * CELL_PADDING);
        let top = match fixed_top {
            Some(top) => top,
            None => self.reserve(height)?,
        };
        let mut style = field.style.clone();
        if style.borders.is_empty() {
            let thin = BorderInfo::solid(0.5, Color::gray(128));
            style.borders.top = Some(thin.clone());
            style.borders.right = Some(thin.clone());
            style.borders.bottom = Some(thin.clone());
            style.borders.left = Some(thin);
        }
        let mut ops = self.box_ops(x, top, width, height, &style);
        if !field.value.is_empty() {
            let baseline = top + CELL_PADDING + style.font_size * 0.8;
            ops.extend(self.text_ops(&field.value, x + CELL_PADDING, baseline, &style));
        }
        self.push_ops(ops);
        Ok(())
    }

    fn page_break(&mut self) -> Result<(), ComposeError> {
        self.require_open("page_break")?;
        self.ensure_page();
        self.finish_page()
    }

    fn close_document(&mut self) -> Result<(), ComposeError> {
        self.require_open("close_document")?;
        if self.table.is_some() {
            return Err(ComposeError::OutOfOrder {
                call: "close_document",
                reason: "a table is still open".into(),
            });
        }
        if self.page.is_some() || self.page_ids.is_empty() {
            self.ensure_page();
            self.finish_page()?;
        }

        let mut font_dict = Dictionary::new();
        for (base_font, key) in &self.fonts {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font.clone(),
                "Encoding" => "WinAnsiEncoding",
            };
            let font_id = self.document.add_object(font);
            font_dict.set(key.as_bytes(), font_id);
        }
        self.document
            .objects
            .insert(self.resources_id, dictionary! { "Font" => font_dict }.into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::from(*id)).collect::<Vec<_>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, pages_dict.into());

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        self.document
            .save_to(&mut self.writer)
            .map_err(|e| ComposeError::Pdf(e.to_string()))?;
        self.writer.flush()?;
        self.closed = true;
        log::info!("Wrote PDF with {} page(s)", self.page_ids.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render_core::TextRun;
    use folio_style::{PageOrientation, PageSize};

    fn setup(size: PageSize, orientation: PageOrientation) -> DocumentSetup {
        DocumentSetup {
            page_size: size,
            orientation,
            document_font: "Helvetica".into(),
            fonts: Vec::new(),
        }
    }

    fn paragraph(text: &str) -> ParagraphContent {
        let style = StyleProperties::default();
        ParagraphContent {
            runs: vec![TextRun {
                text: text.into(),
                style: style.clone(),
            }],
            style,
        }
    }

    #[test]
    fn test_writes_one_pdf_page_per_break() {
        let mut composer = LopdfComposer::new(Vec::new());
        composer
            .open_document(&setup(PageSize::A4, PageOrientation::Portrait))
            .unwrap();
        composer.add_paragraph(&paragraph("First page"), &Placement::Flow).unwrap();
        composer.page_break().unwrap();
        composer.add_paragraph(&paragraph("Second page"), &Placement::Flow).unwrap();
        composer.close_document().unwrap();

        assert_eq!(composer.page_count(), 2);
        let bytes = composer.into_inner().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn test_empty_document_still_has_a_page() {
        let mut composer = LopdfComposer::new(Vec::new());
        composer
            .open_document(&setup(PageSize::Letter, PageOrientation::Landscape))
            .unwrap();
        composer.close_document().unwrap();
        assert_eq!(composer.page_count(), 1);
        assert_eq!((composer.page_width, composer.page_height), (792.0, 612.0));
    }

    #[test]
    fn test_bold_text_uses_bold_type1_font() {
        let mut composer = LopdfComposer::new(Vec::new());
        let style = StyleProperties {
            bold: true,
            ..StyleProperties::default()
        };
        assert_eq!(composer.font_key(&style), "F1");
        assert_eq!(composer.font_key(&StyleProperties::default()), "F2");
        assert_eq!(composer.font_key(&style), "F1");
        assert!(composer.fonts.contains_key("Helvetica-Bold"));
    }

    #[test]
    fn test_calls_require_open_document() {
        let mut composer = LopdfComposer::new(Vec::new());
        assert!(composer.page_break().is_err());
        assert!(composer.into_inner().is_err());
    }
}
