use crate::error::TreeError;
use crate::kind::NodeKind;
use crate::properties::{KindProperties, RootProperties};
use folio_style::StyleBundle;
use folio_types::{FixedPosition, Property};

/// Text sources of a text-bearing node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextContent {
    pub text: Property<String>,
    /// Bound field whose formatted value replaces the literal text.
    pub property: Property<String>,
    /// Format string with `{n}` placeholders.
    pub format: Property<String>,
    pub format_properties: Property<Vec<String>>,
    raw: Vec<String>,
}

impl TextContent {
    /// Character data chunks collected from the markup, in order.
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// The `text` attribute followed by the raw chunks, joined by single spaces.
    pub fn literal(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .text
            .get()
            .map(String::as_str)
            .into_iter()
            .chain(self.raw.iter().map(String::as_str))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.text.is_set() && !self.property.is_set() && !self.format.is_set() && self.raw.is_empty()
    }
}

/// One element of the document tree. The tree owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    /// Locally-set style. Inherited and named styles are applied while rendering.
    pub style: StyleBundle,
    pub position: Property<FixedPosition>,
    pub content: TextContent,
    pub props: KindProperties,
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: StyleBundle::default(),
            position: Property::unset(),
            content: TextContent::default(),
            props: KindProperties::for_kind(kind),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Attaches `child`, failing if its kind is not legal under this node.
    pub fn add_child(&mut self, child: Node) -> Result<(), TreeError> {
        self.kind.check_child(child.kind)?;
        self.children.push(child);
        Ok(())
    }

    /// Appends a chunk of character data. Only text-bearing kinds accept it.
    pub fn append_text(&mut self, text: &str) -> Result<(), TreeError> {
        if !self.kind.is_text_bearing() {
            return Err(TreeError::WrongTypeForRawText(self.kind));
        }
        self.content.raw.push(text.to_string());
        Ok(())
    }

    pub fn root_properties(&self) -> Option<&RootProperties> {
        match &self.props {
            KindProperties::Root(props) => Some(props),
            _ => None,
        }
    }

    /// Number of Page children; meaningful on the root.
    pub fn page_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| c.kind == NodeKind::Page)
            .count()
    }
}
