use crate::parser::{ParseError, TemplateParser};
use folio_style::DocumentStyle;
use folio_traits::ResourceProvider;
use folio_tree::Node;

/// A compiled template: the validated tree plus its resolved style sheet.
///
/// Both are immutable once parsing completes and are shared read-only by every
/// render of the template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDocument {
    root: Node,
    style: DocumentStyle,
    page_count: usize,
}

impl TemplateDocument {
    pub(crate) fn new(root: Node, style: DocumentStyle) -> Self {
        let page_count = root.page_count();
        Self {
            root,
            style,
            page_count,
        }
    }

    /// Parses markup, loading referenced style sheets and fonts through `provider`.
    pub fn parse(source: &str, provider: &dyn ResourceProvider) -> Result<Self, ParseError> {
        TemplateParser::new(source, provider).parse()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Indented description of every node and its set properties.
    pub fn dump(&self) -> String {
        self.root.dump()
    }
}
