//! Walks a compiled template against bound data and drives a composer.

use super::cascade::{effective_style, resolve_style};
use super::defaults::RenderDefaults;
use super::error::RenderError;
use super::text::resolve_text;
use crate::document::TemplateDocument;
use folio_binding::{BindingError, DataValue, FormatterRegistry, PropertyMap};
use folio_render_core::{
    Block, CellContent, CellRole, DocumentComposer, DocumentSetup, ImageContent, LineContent,
    ListContent, ListItemContent, ParagraphContent, Placement, Region, RegionContent, RowSetup,
    SpacerContent, StyleProperties, TableSetup, TextFieldContent, TextRun,
};
use folio_style::{DocumentStyle, StyleBundle};
use folio_traits::ResourceProvider;
use folio_tree::{KindProperties, Node, NodeKind};
use folio_types::UnitValue;

/// One render of a [`TemplateDocument`].
///
/// The driver holds only shared references; the document can be rendered by
/// any number of drivers, each against its own data and composer.
pub struct RenderDriver<'a> {
    document: &'a TemplateDocument,
    formatters: &'a FormatterRegistry,
    provider: &'a dyn ResourceProvider,
    defaults: &'a RenderDefaults,
    document_font: String,
}

impl<'a> RenderDriver<'a> {
    pub fn new(
        document: &'a TemplateDocument,
        formatters: &'a FormatterRegistry,
        provider: &'a dyn ResourceProvider,
        defaults: &'a RenderDefaults,
    ) -> Self {
        let document_font = document
            .root()
            .root_properties()
            .and_then(|props| props.document_font.get().cloned())
            .unwrap_or_else(|| defaults.font.clone());
        Self {
            document,
            formatters,
            provider,
            defaults,
            document_font,
        }
    }

    /// Renders every page in document order, bracketed by open and close calls.
    pub fn render(&self, data: Option<&DataValue>, composer: &mut dyn DocumentComposer) -> Result<(), RenderError> {
        let map = PropertyMap::from_data(data)?;
        let root = self.document.root();
        log::debug!(
            "Rendering {} page(s) against {} bound field(s)",
            self.document.page_count(),
            map.len()
        );

        composer.open_document(&self.setup())?;

        let margins = &root.style.margins;
        if margins.is_complete() {
            composer.set_margins(
                margins.top.value_or(0.0),
                margins.right.value_or(0.0),
                margins.bottom.value_or(0.0),
                margins.left.value_or(0.0),
            )?;
        } else {
            for (side, value) in margins.set_sides() {
                composer.set_margin(side, value)?;
            }
        }

        let root_style = effective_style(&StyleBundle::default(), root, self.sheet());
        let pages = root.children().iter().filter(|c| c.kind() == NodeKind::Page);
        for (index, page) in pages.enumerate() {
            if index > 0 {
                composer.page_break()?;
            }
            self.render_page(page, &root_style, &map, composer)?;
        }

        composer.close_document()?;
        Ok(())
    }

    fn setup(&self) -> DocumentSetup {
        let props = self.document.root().root_properties();
        DocumentSetup {
            page_size: props.and_then(|p| p.page_size.get().copied()).unwrap_or_default(),
            orientation: props.and_then(|p| p.orientation.get().copied()).unwrap_or_default(),
            document_font: self.document_font.clone(),
            fonts: self
                .sheet()
                .symbols
                .custom_fonts()
                .map(|(name, data)| (name.to_string(), data.clone()))
                .collect(),
        }
    }

    fn sheet(&self) -> &DocumentStyle {
        self.document.style()
    }

    fn cascade(&self, inherited: &StyleBundle, node: &Node) -> StyleBundle {
        effective_style(inherited, node, self.sheet())
    }

    fn resolve(&self, bundle: &StyleBundle) -> StyleProperties {
        resolve_style(bundle, self.defaults, &self.document_font)
    }

    fn text(&self, node: &Node, map: &PropertyMap) -> Result<String, BindingError> {
        resolve_text(node, map, self.formatters)
    }

    fn render_page(
        &self,
        page: &Node,
        inherited: &StyleBundle,
        map: &PropertyMap,
        composer: &mut dyn DocumentComposer,
    ) -> Result<(), RenderError> {
        let style = self.cascade(inherited, page);
        for child in page.children() {
            match child.kind() {
                NodeKind::Header | NodeKind::Footer => {
                    let region = if child.kind() == NodeKind::Header {
                        Region::Header
                    } else {
                        Region::Footer
                    };
                    let region_style = self.cascade(&style, child);
                    let content = RegionContent {
                        style: self.resolve(&region_style),
                        blocks: self.blocks(child, &region_style, map)?,
                    };
                    composer.add_region(region, &content)?;
                }
                NodeKind::Paragraph => {
                    let paragraph = self.paragraph(child, &style, map)?;
                    composer.add_paragraph(&paragraph, &placement(child))?;
                }
                NodeKind::List => composer.add_list(&self.list(child, &style, map)?)?,
                NodeKind::Table => self.render_table(child, &style, map, composer)?,
                NodeKind::Image => {
                    let image = self.image(child, &style, map)?;
                    composer.add_image(&image, &placement(child))?;
                }
                NodeKind::Line => composer.add_line(&self.line(child, &style))?,
                NodeKind::TextField => {
                    let field = self.text_field(child, &style, map)?;
                    composer.add_text_field(&field, &placement(child))?;
                }
                other => log::warn!("Ignoring '{}' under a Page", other.tag()),
            }
        }
        Ok(())
    }

    /// A paragraph's own text is its first run, followed by one run per Text child.
    fn paragraph(&self, node: &Node, inherited: &StyleBundle, map: &PropertyMap) -> Result<ParagraphContent, RenderError> {
        let style = self.cascade(inherited, node);
        let resolved = self.resolve(&style);
        let mut runs = Vec::new();

        let own = self.text(node, map)?;
        if !own.is_empty() {
            runs.push(TextRun {
                text: own,
                style: resolved.clone(),
            });
        }
        for child in node.children().iter().filter(|c| c.kind() == NodeKind::Text) {
            let text = self.text(child, map)?;
            if !text.is_empty() {
                runs.push(TextRun {
                    text,
                    style: self.resolve(&self.cascade(&style, child)),
                });
            }
        }

        Ok(ParagraphContent { runs, style: resolved })
    }

    /// Paragraph and Spacer children of a region or a cell.
    fn blocks(&self, node: &Node, style: &StyleBundle, map: &PropertyMap) -> Result<Vec<Block>, RenderError> {
        let mut blocks = Vec::new();
        for child in node.children() {
            match (child.kind(), &child.props) {
                (NodeKind::Paragraph, _) => blocks.push(Block::Paragraph(self.paragraph(child, style, map)?)),
                (NodeKind::Spacer, KindProperties::Spacer(props)) => blocks.push(Block::Spacer(SpacerContent {
                    height: props.height.get().copied(),
                    margins: child.style.margins.clone(),
                })),
                _ => {}
            }
        }
        Ok(blocks)
    }

    fn list(&self, node: &Node, inherited: &StyleBundle, map: &PropertyMap) -> Result<ListContent, RenderError> {
        let style = self.cascade(inherited, node);
        let mut items = Vec::new();
        for item in node.children() {
            items.push(ListItemContent {
                text: self.text(item, map)?,
                style: self.resolve(&self.cascade(&style, item)),
            });
        }

        let props = match &node.props {
            KindProperties::List(props) => props.clone(),
            _ => Default::default(),
        };
        Ok(ListContent {
            numbered: props.enumeration.value_or(false),
            start_index: props.start_index.into_option(),
            symbol: props.symbol.into_option(),
            indentation: props.indentation.into_option(),
            pre_symbol_text: props.pre_symbol_text.into_option(),
            post_symbol_text: props.post_symbol_text.into_option(),
            style: self.resolve(&style),
            items,
        })
    }

    fn render_table(
        &self,
        table: &Node,
        inherited: &StyleBundle,
        map: &PropertyMap,
        composer: &mut dyn DocumentComposer,
    ) -> Result<(), RenderError> {
        let props = match &table.props {
            KindProperties::Table(props) => props.clone(),
            _ => Default::default(),
        };
        let style = self.cascade(inherited, table);

        let setup = TableSetup {
            column_widths: column_widths(table, props.column_widths.get(), props.column_count.get().copied()),
            width: props.width.value_or(UnitValue::Percent(100.0)),
            large_table: props.large_table.value_or(false),
            vertical_border_spacing: props.vertical_border_spacing.get().copied(),
            horizontal_border_spacing: props.horizontal_border_spacing.get().copied(),
            style: self.resolve(&style),
        };
        composer.start_table(&setup, &placement(table))?;

        let table_row_height = props.row_height.get().copied();
        for row in table.children() {
            match &row.props {
                KindProperties::TableRow(row_props) => {
                    let row_style = self.cascade(&style, row);
                    let height = row_props.row_height.get().copied().or(table_row_height);
                    let role = if row_props.header.value_or(false) {
                        CellRole::Header
                    } else if row_props.footer.value_or(false) {
                        CellRole::Footer
                    } else {
                        composer.start_row(&RowSetup {
                            height,
                            style: self.resolve(&row_style),
                        })?;
                        CellRole::Body
                    };
                    for cell in row.children() {
                        let content = self.cell(cell, &row_style, role, height, map, None)?;
                        composer.add_cell(&content)?;
                    }
                }
                KindProperties::TableDataRow(_) => {
                    self.render_data_rows(row, &style, table_row_height, map, composer)?;
                }
                _ => {}
            }
        }

        composer.end_table()?;
        Ok(())
    }

    /// Expands a data row template once per record of its bound sequence.
    fn render_data_rows(
        &self,
        row: &Node,
        table_style: &StyleBundle,
        table_row_height: Option<f32>,
        map: &PropertyMap,
        composer: &mut dyn DocumentComposer,
    ) -> Result<(), RenderError> {
        let props = match &row.props {
            KindProperties::TableDataRow(props) => props,
            _ => return Ok(()),
        };
        let source = props
            .data_source
            .get()
            .ok_or_else(|| BindingError::MissingAttribute {
                element: NodeKind::TableDataRow.tag().to_string(),
                attribute: "dataSource",
            })?;
        let value = map.get(source)?;
        let records = value.as_sequence().ok_or_else(|| BindingError::NotASequence {
            property: source.clone(),
            found: value.kind_name(),
        })?;

        let row_style = self.cascade(table_style, row);
        let row_setup = RowSetup {
            height: props.row_height.get().copied().or(table_row_height),
            style: self.resolve(&row_style),
        };
        let column_properties = match props.column_cell_properties.get() {
            Some(names) => names.clone(),
            None if row.has_children() => Vec::new(),
            None => {
                return Err(BindingError::MissingAttribute {
                    element: NodeKind::TableDataRow.tag().to_string(),
                    attribute: "columnCellProperties",
                }
                .into());
            }
        };
        let plain_cell = self.resolve(&self.cascade(&row_style, &Node::new(NodeKind::Cell)));
        log::debug!("Expanding data row '{}' over {} record(s)", source, records.len());

        for (index, item) in records.iter().enumerate() {
            let record = item.as_record().ok_or_else(|| BindingError::RowNotARecord {
                property: source.clone(),
                index,
            })?;
            let row_map = PropertyMap::from_record(record);
            composer.start_row(&row_setup)?;

            if row.has_children() {
                // Only the leading cell can carry the row number.
                for (position, cell) in row.children().iter().enumerate() {
                    let row_index = (position == 0).then_some(index);
                    let content = self.cell(cell, &row_style, CellRole::Body, row_setup.height, &row_map, row_index)?;
                    composer.add_cell(&content)?;
                }
            } else {
                for name in &column_properties {
                    composer.add_cell(&CellContent {
                        role: CellRole::Body,
                        column_span: 1,
                        row_span: 1,
                        height: row_setup.height,
                        text: self.formatters.format(row_map.get(name)?)?,
                        blocks: Vec::new(),
                        style: plain_cell.clone(),
                    })?;
                }
            }
        }
        Ok(())
    }

    fn cell(
        &self,
        cell: &Node,
        row_style: &StyleBundle,
        role: CellRole,
        height: Option<f32>,
        map: &PropertyMap,
        row_index: Option<usize>,
    ) -> Result<CellContent, RenderError> {
        let props = match &cell.props {
            KindProperties::Cell(props) => props.clone(),
            _ => Default::default(),
        };
        let style = self.cascade(row_style, cell);
        let text = match row_index {
            Some(index) if props.enumerate.value_or(false) => (index + 1).to_string(),
            _ => self.text(cell, map)?,
        };
        Ok(CellContent {
            role,
            column_span: props.column_span.value_or(1),
            row_span: props.row_span.value_or(1),
            height,
            text,
            blocks: self.blocks(cell, &style, map)?,
            style: self.resolve(&style),
        })
    }

    fn image(&self, node: &Node, inherited: &StyleBundle, map: &PropertyMap) -> Result<ImageContent, RenderError> {
        let props = match &node.props {
            KindProperties::Image(props) => props.clone(),
            _ => Default::default(),
        };
        let (data, origin) = if let Some(property) = props.property.get() {
            let value = map.get(property)?;
            let bytes = value.as_bytes().ok_or_else(|| BindingError::NotBytes {
                property: property.clone(),
                found: value.kind_name(),
            })?;
            (bytes.clone(), format!("property '{}'", property))
        } else if let Some(source) = props.source.get() {
            (self.provider.load(source)?, source.clone())
        } else {
            return Err(BindingError::MissingAttribute {
                element: NodeKind::Image.tag().to_string(),
                attribute: "source",
            }
            .into());
        };

        Ok(ImageContent {
            data,
            origin,
            left: props.left.into_option(),
            bottom: props.bottom.into_option(),
            width: props.width.into_option(),
            horizontal_scaling: props.horizontal_scaling.value_or(1.0),
            vertical_scaling: props.vertical_scaling.value_or(1.0),
            style: self.resolve(&self.cascade(inherited, node)),
        })
    }

    fn line(&self, node: &Node, inherited: &StyleBundle) -> LineContent {
        let (length, alignment) = match &node.props {
            KindProperties::Line(props) => (props.length.get().copied(), props.alignment.get().copied()),
            _ => (None, None),
        };
        LineContent {
            length,
            alignment,
            style: self.resolve(&self.cascade(inherited, node)),
        }
    }

    fn text_field(&self, node: &Node, inherited: &StyleBundle, map: &PropertyMap) -> Result<TextFieldContent, RenderError> {
        let props = match &node.props {
            KindProperties::TextField(props) => props.clone(),
            _ => Default::default(),
        };
        let value = match (props.value.get(), props.property.get()) {
            (Some(value), _) => value.clone(),
            (None, Some(property)) => self.formatters.format(map.get(property)?)?,
            (None, None) => String::new(),
        };
        Ok(TextFieldContent {
            name: props.name.into_option(),
            value,
            multiline: props.multiline.value_or(false),
            width: props.width.into_option(),
            height: props.height.into_option(),
            style: self.resolve(&self.cascade(inherited, node)),
        })
    }
}

fn placement(node: &Node) -> Placement {
    match node.position.get() {
        Some(position) => Placement::Fixed(position.clone()),
        None => Placement::Flow,
    }
}

/// Explicit widths win, then `columnCount` equal columns, then one column per
/// cell of the first row.
fn column_widths(table: &Node, widths: Option<&Vec<f32>>, count: Option<u32>) -> Vec<f32> {
    if let Some(widths) = widths.filter(|w| !w.is_empty()) {
        return widths.clone();
    }
    let count = count.map(|n| n as usize).unwrap_or_else(|| {
        table
            .first_child()
            .map(|row| match (&row.props, row.has_children()) {
                (_, true) => row.children().len(),
                (KindProperties::TableDataRow(props), false) => {
                    props.column_cell_properties.get().map_or(0, Vec::len)
                }
                _ => 0,
            })
            .unwrap_or(0)
    });
    vec![1.0; count.max(1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_binding::Record;
    use folio_render_core::{CompositionCall, RecordingComposer};
    use folio_traits::InMemoryResourceProvider;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn render(source: &str, data: Option<&DataValue>) -> Result<RecordingComposer, Box<dyn std::error::Error>> {
        let _ = env_logger::builder().is_test(true).try_init();
        let provider = InMemoryResourceProvider::new();
        let document = TemplateDocument::parse(source, &provider)?;
        let formatters = FormatterRegistry::with_defaults();
        let defaults = RenderDefaults::default();
        let mut composer = RecordingComposer::new();
        RenderDriver::new(&document, &formatters, &provider, &defaults).render(data, &mut composer)?;
        Ok(composer)
    }

    fn invoice() -> DataValue {
        let line = |item: &str, qty: i64| DataValue::from(Record::new("Line").with_field("Item", item).with_field("Qty", qty));
        Record::new("Invoice")
            .with_field("Customer", "ACME")
            .with_field("Lines", vec![line("Bolts", 10), line("Nuts", 20), line("Washers", 5)])
            .into()
    }

    #[test]
    fn test_page_breaks_between_pages_only() -> TestResult {
        let composer = render("<PdfDocument><Page/><Page/><Page/></PdfDocument>", None)?;
        assert_eq!(
            composer.call_names(),
            vec!["open_document", "page_break", "page_break", "close_document"]
        );
        Ok(())
    }

    #[test]
    fn test_root_margins() -> TestResult {
        let composer = render(r#"<PdfDocument margins="10,20,30,40"><Page/></PdfDocument>"#, None)?;
        assert!(matches!(
            composer.calls()[1],
            CompositionCall::SetMargins { top, right, bottom, left } if (top, right, bottom, left) == (10.0, 20.0, 30.0, 40.0)
        ));

        let composer = render(r#"<PdfDocument leftMargin="15"><Page/></PdfDocument>"#, None)?;
        assert_eq!(composer.call_names(), vec!["open_document", "set_margin", "close_document"]);
        Ok(())
    }

    #[test]
    fn test_paragraph_runs() -> TestResult {
        let source = r#"<PdfDocument><Page>
            <Paragraph property="Customer"><Text bold="true">Thanks</Text><Text/></Paragraph>
        </Page></PdfDocument>"#;
        let composer = render(source, Some(&invoice()))?;
        let paragraphs: Vec<_> = composer.paragraphs().collect();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].runs.len(), 2);
        assert_eq!(paragraphs[0].text(), "ACME Thanks");
        assert!(paragraphs[0].runs[1].style.bold);
        assert!(!paragraphs[0].runs[0].style.bold);
        Ok(())
    }

    #[test]
    fn test_data_rows_expand_per_record() -> TestResult {
        let source = r#"<PdfDocument><Page><Table columnWidths="1,3,1">
            <TableDataRow dataSource="Lines">
                <Cell enumerate="true"/><Cell property="Item"/><Cell property="Qty"/>
            </TableDataRow>
        </Table></Page></PdfDocument>"#;
        let composer = render(source, Some(&invoice()))?;
        assert_eq!(composer.count("start_row"), 3);
        let texts: Vec<String> = composer.cells().map(|c| c.text.clone()).collect();
        assert_eq!(
            texts,
            vec!["1", "Bolts", "10", "2", "Nuts", "20", "3", "Washers", "5"]
        );
        Ok(())
    }

    #[test]
    fn test_column_cell_properties() -> TestResult {
        let source = r#"<PdfDocument><Page><Table>
            <TableDataRow dataSource="Lines" columnCellProperties="Qty,Item"/>
        </Table></Page></PdfDocument>"#;
        let composer = render(source, Some(&invoice()))?;
        let texts: Vec<String> = composer.cells().take(2).map(|c| c.text.clone()).collect();
        assert_eq!(texts, vec!["10", "Bolts"]);
        match &composer.calls()[1] {
            CompositionCall::StartTable { table, .. } => assert_eq!(table.column_widths.len(), 2),
            other => panic!("expected start_table, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_only_leading_cell_is_enumerated() -> TestResult {
        let source = r#"<PdfDocument><Page><Table>
            <TableDataRow dataSource="Lines">
                <Cell property="Item"/><Cell enumerate="true" text="-"/>
            </TableDataRow>
        </Table></Page></PdfDocument>"#;
        let composer = render(source, Some(&invoice()))?;
        let texts: Vec<String> = composer.cells().take(4).map(|c| c.text.clone()).collect();
        assert_eq!(texts, vec!["Bolts", "-", "Nuts", "-"]);
        Ok(())
    }

    #[test]
    fn test_data_row_without_cells_needs_column_properties() {
        let source = r#"<PdfDocument><Page><Table>
            <TableDataRow dataSource="Lines"/>
        </Table></Page></PdfDocument>"#;
        let err = render(source, Some(&invoice())).unwrap_err();
        assert!(matches!(
            *err.downcast::<RenderError>().unwrap(),
            RenderError::Binding(BindingError::MissingAttribute { attribute: "columnCellProperties", .. })
        ));
    }

    #[test]
    fn test_header_row_has_no_start_row() -> TestResult {
        let source = r#"<PdfDocument><Page><Table>
            <TableRow header="true"><Cell text="Item"/></TableRow>
            <TableRow><Cell text="Bolts"/></TableRow>
        </Table></Page></PdfDocument>"#;
        let composer = render(source, None)?;
        assert_eq!(
            composer.call_names(),
            vec!["open_document", "start_table", "add_cell", "start_row", "add_cell", "end_table", "close_document"]
        );
        assert_eq!(composer.cells().next().map(|c| c.role), Some(CellRole::Header));
        Ok(())
    }

    #[test]
    fn test_data_source_must_be_a_sequence() {
        let source = r#"<PdfDocument><Page><Table>
            <TableDataRow dataSource="Customer"/>
        </Table></Page></PdfDocument>"#;
        let err = render(source, Some(&invoice())).unwrap_err();
        let err = err.downcast::<RenderError>().unwrap();
        assert!(matches!(
            *err,
            RenderError::Binding(BindingError::NotASequence { ref property, .. }) if property == "Customer"
        ));
    }

    #[test]
    fn test_image_from_bound_bytes() -> TestResult {
        let data: DataValue = Record::new("Badge").with_field("Logo", DataValue::bytes(vec![1u8, 2, 3])).into();
        let composer = render(
            r#"<PdfDocument><Page><Image property="Logo" width="40"/></Page></PdfDocument>"#,
            Some(&data),
        )?;
        match &composer.calls()[1] {
            CompositionCall::AddImage { image, .. } => {
                assert_eq!(image.data.as_slice(), &[1, 2, 3]);
                assert_eq!(image.width, Some(40.0));
                assert_eq!(image.horizontal_scaling, 1.0);
            }
            other => panic!("expected add_image, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_missing_image_resource() {
        let err = render(r#"<PdfDocument><Page><Image source="logo.png"/></Page></PdfDocument>"#, None).unwrap_err();
        assert!(matches!(*err.downcast::<RenderError>().unwrap(), RenderError::Resource(_)));
    }

    #[test]
    fn test_regions_and_text_field() -> TestResult {
        let source = r#"<PdfDocument><Page>
            <Header><Paragraph text="Report"/><Spacer height="5"/></Header>
            <TextField name="customer" property="Customer"/>
        </Page></PdfDocument>"#;
        let composer = render(source, Some(&invoice()))?;
        match &composer.calls()[1] {
            CompositionCall::AddRegion { region, content } => {
                assert_eq!(*region, Region::Header);
                assert_eq!(content.blocks.len(), 2);
            }
            other => panic!("expected add_region, got {:?}", other),
        }
        match &composer.calls()[2] {
            CompositionCall::AddTextField { field, .. } => assert_eq!(field.value, "ACME"),
            other => panic!("expected add_text_field, got {:?}", other),
        }
        Ok(())
    }
}
