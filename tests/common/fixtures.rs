use folio::{DataValue, Record};

/// Wraps page content in a single-page document.
pub fn single_page(content: &str) -> String {
    format!("<PdfDocument><Page>{}</Page></PdfDocument>", content)
}

/// Wraps page content in a document carrying the given root attributes.
pub fn document_with(root_attributes: &str, content: &str) -> String {
    format!("<PdfDocument {}><Page>{}</Page></PdfDocument>", root_attributes, content)
}

pub fn order_line(item: &str, quantity: i64, price: f64) -> DataValue {
    Record::new("OrderLine")
        .with_field("Item", item)
        .with_field("Quantity", quantity)
        .with_field("Price", price)
        .into()
}

/// An order with a customer name and three lines.
pub fn order() -> DataValue {
    Record::new("Order")
        .with_field("Customer", "Jane Doe")
        .with_field("Number", 1042)
        .with_field(
            "Lines",
            vec![
                order_line("Widget", 2, 9.5),
                order_line("Gadget", 1, 24.0),
                order_line("Doohickey", 12, 0.75),
            ],
        )
        .into()
}

/// A style sheet with a named brand color and a compact cell section.
pub const BRAND_STYLE_SHEET: &str = r#"<PdfDocumentStyle>
    <Color name="brand" value="0,51,102"/>
    <TableCellStyle>
        <Entry name="fontSize" value="8"/>
        <Entry name="borders" value="1;solid;brand"/>
    </TableCellStyle>
    <ParagraphStyle>
        <Entry name="font" value="Times-Roman"/>
    </ParagraphStyle>
</PdfDocumentStyle>"#;
