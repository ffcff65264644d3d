mod common;

use common::fixtures::*;
use common::{TestResult, init_logging, pipeline};
use folio::PipelineError;
use folio_core::tree::{NodeKind, TreeError};
use folio::InMemoryResourceProvider;
use folio_core::{ParseError, TemplateDocument};

fn parse_error(template: &str) -> ParseError {
    match pipeline(template) {
        Err(PipelineError::Parse(err)) => err,
        Err(other) => panic!("expected a parse error, got {}", other),
        Ok(_) => panic!("expected '{}' to be rejected", template),
    }
}

#[test]
fn test_every_legal_container_accepts_its_children() -> TestResult {
    init_logging();
    let template = r#"<PdfDocument>
        <Page>
            <Header><Paragraph text="Head"/><Spacer height="4"/></Header>
            <Footer><Paragraph text="Foot"/></Footer>
            <Paragraph>Intro <Text italic="true">here</Text></Paragraph>
            <List><ListItem>One</ListItem><ListItem>Two</ListItem></List>
            <Table columnCount="2">
                <TableRow><Cell>A<Paragraph text="nested"/></Cell><Cell/></TableRow>
                <TableDataRow dataSource="Lines"><Cell property="Item"/></TableDataRow>
            </Table>
            <Image source="logo.png"/>
            <Line length="100"/>
            <TextField name="notes" multiline="true"/>
        </Page>
    </PdfDocument>"#;
    let pipeline = pipeline(template)?;
    let page = &pipeline.document().root().children()[0];
    let kinds: Vec<NodeKind> = page.children().iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Header,
            NodeKind::Footer,
            NodeKind::Paragraph,
            NodeKind::List,
            NodeKind::Table,
            NodeKind::Image,
            NodeKind::Line,
            NodeKind::TextField,
        ]
    );
    Ok(())
}

#[test]
fn test_illegal_children_are_rejected() {
    init_logging();
    let cases = [
        (single_page("<ListItem/>"), NodeKind::Page, NodeKind::ListItem),
        (single_page("<List><Paragraph/></List>"), NodeKind::List, NodeKind::Paragraph),
        (single_page("<Table><Cell/></Table>"), NodeKind::Table, NodeKind::Cell),
        (single_page("<Paragraph><Paragraph/></Paragraph>"), NodeKind::Paragraph, NodeKind::Paragraph),
        (single_page("<Header><Table/></Header>"), NodeKind::Header, NodeKind::Table),
        ("<PdfDocument><Paragraph/></PdfDocument>".to_string(), NodeKind::Root, NodeKind::Paragraph),
    ];
    for (template, parent_kind, found_kind) in cases {
        let err = parse_error(&template);
        match err.tree_error() {
            Some(TreeError::UnexpectedElement { parent, found, .. }) => {
                assert_eq!((*parent, *found), (parent_kind, found_kind), "for {}", template);
            }
            other => panic!("expected UnexpectedElement for {}, got {:?}", template, other),
        }
    }
}

#[test]
fn test_leaf_kinds_accept_no_children() {
    init_logging();
    let cases = [
        single_page("<Image source=\"a.png\"><Text/></Image>"),
        single_page("<Line><Text/></Line>"),
        single_page("<TextField><Text/></TextField>"),
        single_page("<Header><Spacer><Text/></Spacer></Header>"),
    ];
    for template in cases {
        let err = parse_error(&template);
        assert!(
            matches!(err.tree_error(), Some(TreeError::UnexpectedElement { found: NodeKind::Text, .. })),
            "{} must not accept children",
            template
        );
    }
}

#[test]
fn test_unknown_element_names_the_tag() {
    init_logging();
    let err = parse_error(&single_page("<Marquee/>"));
    assert_eq!(err.tree_error(), Some(&TreeError::InvalidElement("Marquee".into())));
    assert!(err.to_string().contains("Marquee"));
}

#[test]
fn test_wrong_root() {
    init_logging();
    let err = parse_error("<Page/>");
    assert_eq!(err.tree_error(), Some(&TreeError::InvalidRoot(NodeKind::Page)));
}

#[test]
fn test_errors_carry_a_location() {
    init_logging();
    let err = parse_error("<PdfDocument>\n  <Page>\n    <Bogus/>\n  </Page>\n</PdfDocument>");
    let location = err.location().expect("tree errors carry a location");
    assert_eq!(location.line, 3);
}

#[test]
fn test_malformed_markup() {
    init_logging();
    assert!(matches!(parse_error("<PdfDocument><Page></PdfDocument>"), ParseError::Xml { .. }));
    assert!(pipeline("<PdfDocument><Page>").is_err());
    assert!(matches!(parse_error("   "), ParseError::MalformedDocument { .. }));
}

#[test]
fn test_raw_text_only_in_text_bearing_elements() {
    init_logging();
    let err = parse_error(&single_page("<Table>text</Table>"));
    assert_eq!(err.tree_error(), Some(&TreeError::WrongTypeForRawText(NodeKind::Table)));

    let template = single_page("<List><ListItem>ok</ListItem></List><Table><TableRow><Cell>ok</Cell></TableRow></Table>");
    assert!(pipeline(&template).is_ok());
}

#[test]
fn test_parsing_is_repeatable() -> TestResult {
    init_logging();
    let template = document_with(
        r#"pageSize="Letter" margins="36""#,
        r#"<Paragraph fontSize="11" topBorder="1;solid;black">Text</Paragraph>"#,
    );
    let provider = InMemoryResourceProvider::new();
    let first = TemplateDocument::parse(&template, &provider)?;
    let second = TemplateDocument::parse(&template, &provider)?;
    assert_eq!(first, second);
    assert_eq!(first.dump(), second.dump());
    Ok(())
}

#[test]
fn test_dump_lists_kinds_and_properties() -> TestResult {
    init_logging();
    let pipeline = pipeline(&single_page(r#"<Paragraph fontSize="11">Hello</Paragraph>"#))?;
    let dump = pipeline.document().dump();
    assert!(dump.contains("PdfDocument"));
    assert!(dump.contains("Paragraph"));
    assert!(dump.contains("Hello"));
    Ok(())
}
