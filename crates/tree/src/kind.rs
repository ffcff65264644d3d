use crate::error::TreeError;
use folio_style::StyleSection;

/// Every element kind a template can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Page,
    Header,
    Footer,
    Paragraph,
    Text,
    List,
    ListItem,
    Table,
    TableRow,
    TableDataRow,
    Cell,
    Image,
    Line,
    Spacer,
    TextField,
}

/// Attribute groups a kind accepts in addition to its own attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeTraits {
    /// `margins` and the four per-side margins.
    pub margined: bool,
    /// `position` for fixed placement.
    pub positioned: bool,
    pub bordered: bool,
    /// Font, color and alignment attributes.
    pub styled: bool,
    /// Text content attributes and raw character data.
    pub text_bearing: bool,
    pub form_field: bool,
}

impl NodeKind {
    pub const ALL: [NodeKind; 16] = [
        NodeKind::Root,
        NodeKind::Page,
        NodeKind::Header,
        NodeKind::Footer,
        NodeKind::Paragraph,
        NodeKind::Text,
        NodeKind::List,
        NodeKind::ListItem,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableDataRow,
        NodeKind::Cell,
        NodeKind::Image,
        NodeKind::Line,
        NodeKind::Spacer,
        NodeKind::TextField,
    ];

    /// Resolves a markup element name through the closed factory table.
    pub fn from_tag(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.tag() == name)
    }

    /// The markup element name of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Root => "PdfDocument",
            NodeKind::Page => "Page",
            NodeKind::Header => "Header",
            NodeKind::Footer => "Footer",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Text => "Text",
            NodeKind::List => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Table => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableDataRow => "TableDataRow",
            NodeKind::Cell => "Cell",
            NodeKind::Image => "Image",
            NodeKind::Line => "Line",
            NodeKind::Spacer => "Spacer",
            NodeKind::TextField => "TextField",
        }
    }

    pub fn legal_children(&self) -> &'static [NodeKind] {
        use NodeKind::*;
        match self {
            Root => &[Page],
            Page => &[Header, Footer, Image, Line, List, Paragraph, Table, TextField],
            Header | Footer => &[Paragraph, Spacer],
            Paragraph => &[Text],
            List => &[ListItem],
            Table => &[TableRow, TableDataRow],
            TableRow | TableDataRow => &[Cell],
            Cell => &[Paragraph, Spacer],
            Text | ListItem | Image | Line | Spacer | TextField => &[],
        }
    }

    pub fn can_have_children(&self) -> bool {
        !self.legal_children().is_empty()
    }

    /// Fails with the legal kinds listed when `child` may not be attached here.
    pub fn check_child(&self, child: NodeKind) -> Result<(), TreeError> {
        if self.legal_children().contains(&child) {
            Ok(())
        } else {
            Err(TreeError::UnexpectedElement {
                parent: *self,
                found: child,
                expected: self.legal_children().to_vec(),
            })
        }
    }

    pub fn traits(&self) -> NodeTraits {
        use NodeKind::*;
        let margined = matches!(self, Root | Paragraph | List | Table | Image | Line | Spacer | TextField);
        let positioned = matches!(self, Paragraph | Table | Image | TextField);
        let bordered = matches!(
            self,
            Page | Header
                | Footer
                | Paragraph
                | Text
                | List
                | ListItem
                | Table
                | TableRow
                | TableDataRow
                | Cell
                | Image
                | Line
        );
        let styled = matches!(
            self,
            Header | Footer | Paragraph | Text | List | ListItem | Table | TableRow | TableDataRow | Cell | Line
        );
        NodeTraits {
            margined,
            positioned,
            bordered,
            styled,
            text_bearing: self.is_text_bearing(),
            form_field: *self == TextField,
        }
    }

    /// Kinds that accept raw character data and text content attributes.
    pub fn is_text_bearing(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph | NodeKind::Text | NodeKind::ListItem | NodeKind::Cell
        )
    }

    /// The style-sheet section that applies to this kind, if any.
    pub fn style_section(&self) -> Option<StyleSection> {
        match self {
            NodeKind::Paragraph => Some(StyleSection::Paragraph),
            NodeKind::Table => Some(StyleSection::Table),
            NodeKind::Cell => Some(StyleSection::TableCell),
            NodeKind::ListItem => Some(StyleSection::ListItem),
            NodeKind::Line => Some(StyleSection::Line),
            _ => None,
        }
    }

    /// The kind a style-sheet section is resolved against.
    pub fn for_section(section: StyleSection) -> NodeKind {
        match section {
            StyleSection::Paragraph => NodeKind::Paragraph,
            StyleSection::Table => NodeKind::Table,
            StyleSection::TableCell => NodeKind::Cell,
            StyleSection::ListItem => NodeKind::ListItem,
            StyleSection::Line => NodeKind::Line,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_round_trips_every_kind() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(NodeKind::from_tag("Style"), None);
        assert_eq!(NodeKind::from_tag("paragraph"), None);
    }

    #[test]
    fn test_root_accepts_only_pages() {
        assert!(NodeKind::Root.check_child(NodeKind::Page).is_ok());
        for kind in NodeKind::ALL.into_iter().filter(|k| *k != NodeKind::Page) {
            match NodeKind::Root.check_child(kind) {
                Err(TreeError::UnexpectedElement { expected, .. }) => {
                    assert_eq!(expected, vec![NodeKind::Page])
                }
                other => panic!("expected structural error for {kind}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_page_children() {
        let page = NodeKind::Page;
        for kind in [
            NodeKind::Header,
            NodeKind::Footer,
            NodeKind::Image,
            NodeKind::Line,
            NodeKind::List,
            NodeKind::Paragraph,
            NodeKind::Table,
            NodeKind::TextField,
        ] {
            assert!(page.check_child(kind).is_ok(), "{kind} should be legal in Page");
        }
        assert!(page.check_child(NodeKind::Cell).is_err());
        assert!(page.check_child(NodeKind::Page).is_err());
    }

    #[test]
    fn test_leaf_kinds_reject_children() {
        for kind in [NodeKind::Text, NodeKind::Image, NodeKind::Spacer, NodeKind::TextField] {
            assert!(!kind.can_have_children());
        }
    }

    #[test]
    fn test_traits() {
        assert!(NodeKind::TextField.traits().form_field);
        assert!(!NodeKind::TextField.traits().bordered);
        assert!(NodeKind::Page.traits().bordered);
        assert!(!NodeKind::Page.traits().styled);
        assert!(NodeKind::Cell.traits().text_bearing);
        assert!(!NodeKind::Cell.traits().margined);
    }
}
