mod common;

use common::fixtures::*;
use common::pdf_assertions::first_page_size;
use common::{TestResult, generate_pdf, init_logging, pipeline};

#[test]
fn test_one_pdf_page_per_template_page() -> TestResult {
    init_logging();
    let template = r#"<PdfDocument>
        <Page><Paragraph text="First"/></Page>
        <Page><Paragraph text="Second"/></Page>
        <Page/>
    </PdfDocument>"#;
    let pdf = generate_pdf(template, None)?;
    assert_pdf_page_count!(pdf, 3);
    assert_pdf_contains_text!(pdf, "First");
    assert_pdf_contains_text!(pdf, "Second");
    Ok(())
}

#[test]
fn test_page_size_and_orientation() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&document_with(r#"pageSize="Letter" orientation="landscape""#, ""), None)?;
    assert_eq!(first_page_size(&pdf.doc), Some((792.0, 612.0)));

    let pdf = generate_pdf(&single_page(""), None)?;
    assert_eq!(first_page_size(&pdf.doc), Some((595.0, 842.0)));
    Ok(())
}

#[test]
fn test_table_rows_from_data() -> TestResult {
    init_logging();
    let template = single_page(
        r#"<Table columnWidths="1,3">
            <TableRow header="true"><Cell text="No"/><Cell text="Item"/></TableRow>
            <TableDataRow dataSource="Lines"><Cell enumerate="true"/><Cell property="Item"/></TableDataRow>
        </Table>"#,
    );
    let pdf = generate_pdf(&template, Some(&order()))?;
    for text in ["Item", "Widget", "Gadget", "Doohickey"] {
        assert_pdf_contains_text!(pdf, text);
    }
    Ok(())
}

#[test]
fn test_styled_text_selects_standard_fonts() -> TestResult {
    init_logging();
    let template = single_page(
        r#"<Paragraph text="Plain"/><Paragraph text="Strong" bold="true"/><Paragraph text="Serif" font="Times-Roman" italic="true"/>"#,
    );
    let pdf = generate_pdf(&template, None)?;
    assert_pdf_has_font!(pdf, "Helvetica");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    assert_pdf_has_font!(pdf, "Times-Italic");
    Ok(())
}

#[test]
fn test_header_and_footer_regions_are_drawn() -> TestResult {
    init_logging();
    let template = r#"<PdfDocument>
        <Page><Header><Paragraph text="Quarterly"/></Header><Paragraph text="Body"/></Page>
        <Page><Footer><Paragraph text="Appendix"/></Footer></Page>
    </PdfDocument>"#;
    let pdf = generate_pdf(template, None)?;
    assert_pdf_page_count!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Quarterly");
    assert_pdf_contains_text!(pdf, "Appendix");
    Ok(())
}

#[test]
fn test_same_pipeline_renders_repeatedly() -> TestResult {
    init_logging();
    let pipeline = pipeline(&single_page(r#"<Paragraph property="Customer"/>"#))?;
    let first = pipeline.render_to_writer(Some(&order()), Vec::new())?;
    let second = pipeline.render_to_writer(Some(&order()), Vec::new())?;
    assert!(!first.is_empty());
    assert_eq!(first.len(), second.len());
    Ok(())
}

#[test]
fn test_render_to_file() -> TestResult {
    init_logging();
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("out.pdf");
    pipeline(&single_page(r#"<Paragraph text="Saved"/>"#))?.render_to_file(None, &output)?;
    let pdf = common::GeneratedPdf::from_bytes(std::fs::read(&output)?)?;
    assert_pdf_contains_text!(pdf, "Saved");
    Ok(())
}
