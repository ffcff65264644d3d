use crate::kind::NodeKind;
use folio_style::ValueParseError;
use thiserror::Error;

fn kind_list(kinds: &[NodeKind]) -> String {
    kinds
        .iter()
        .map(|k| k.tag())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Structural and attribute errors raised while building the tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Unknown element '{0}'")]
    InvalidElement(String),

    #[error("The document root must be PdfDocument, found '{}'", .0.tag())]
    InvalidRoot(NodeKind),

    #[error("Unexpected element '{}' inside '{}'; expected one of: [{}]", .found.tag(), .parent.tag(), kind_list(.expected))]
    UnexpectedElement {
        parent: NodeKind,
        found: NodeKind,
        expected: Vec<NodeKind>,
    },

    #[error("Element '{}' cannot contain raw text", .0.tag())]
    WrongTypeForRawText(NodeKind),

    #[error("Type: '{}' - Invalid property: '{name}'='{value}'.", .kind.tag())]
    UnknownAttribute {
        kind: NodeKind,
        name: String,
        value: String,
    },

    #[error("Type: '{}' - Invalid value for '{name}': {source}", .kind.tag())]
    InvalidAttributeValue {
        kind: NodeKind,
        name: String,
        #[source]
        source: ValueParseError,
    },
}
