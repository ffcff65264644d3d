//! Streaming construction of the document tree.

use super::assign::assign;
use super::cursor::XmlCursor;
use super::error::ParseError;
use super::stylesheet_parser::{INLINE_STYLE_ELEMENT, StyleBlockParser, parse_style_sheet};
use crate::document::TemplateDocument;
use folio_style::DocumentStyle;
use folio_traits::ResourceProvider;
use folio_tree::{Node, NodeKind, TreeError};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// Builds a [`TemplateDocument`] from markup with a stack of open nodes.
pub struct TemplateParser<'a> {
    cursor: XmlCursor<'a>,
    provider: &'a dyn ResourceProvider,
    style: DocumentStyle,
    stack: Vec<Node>,
    root: Option<Node>,
    pending_text: String,
}

impl<'a> TemplateParser<'a> {
    pub fn new(content: &'a str, provider: &'a dyn ResourceProvider) -> Self {
        Self {
            cursor: XmlCursor::new(content),
            provider,
            style: DocumentStyle::new(),
            stack: Vec::new(),
            root: None,
            pending_text: String::new(),
        }
    }

    pub fn parse(mut self) -> Result<TemplateDocument, ParseError> {
        loop {
            match self.cursor.read_event()? {
                Event::Start(e) => self.open_element(&e, false)?,
                Event::Empty(e) => self.open_element(&e, true)?,
                Event::End(_) => {
                    self.flush_text()?;
                    self.close_node()?;
                }
                Event::Text(e) => {
                    let text = self.cursor.decode(&e)?.to_string();
                    self.pending_text.push_str(&text);
                }
                Event::CData(e) => {
                    let text = self.cursor.decode(&e)?.to_string();
                    self.pending_text.push_str(&text);
                }
                Event::GeneralRef(e) => self.resolve_reference(&e)?,
                Event::PI(_) => log::warn!("Ignoring processing instruction at {}", self.cursor.location()),
                Event::DocType(_) => log::warn!("Ignoring DOCTYPE declaration at {}", self.cursor.location()),
                Event::Comment(_) | Event::Decl(_) => (),
                Event::Eof => break,
            }
        }

        if let Some(open) = self.stack.last() {
            return Err(ParseError::MalformedDocument {
                message: format!("element <{}> is never closed", open.kind().tag()),
                location: self.cursor.location(),
            });
        }
        let root = self.root.ok_or_else(|| ParseError::MalformedDocument {
            message: "document has no root element".into(),
            location: self.cursor.location(),
        })?;
        log::debug!("Parsed template with {} page(s)", root.page_count());
        Ok(TemplateDocument::new(root, self.style))
    }

    fn tree_error(&self, source: TreeError) -> ParseError {
        ParseError::Tree {
            source,
            location: self.cursor.location(),
        }
    }

    fn open_element(&mut self, start: &BytesStart<'_>, empty: bool) -> Result<(), ParseError> {
        self.flush_text()?;
        let name = self.cursor.tag_name(start)?;

        if name == INLINE_STYLE_ELEMENT {
            return self.inline_style(empty);
        }

        let kind = NodeKind::from_tag(&name).ok_or_else(|| self.tree_error(TreeError::InvalidElement(name)))?;
        if self.stack.is_empty() {
            if self.root.is_some() {
                return Err(ParseError::MalformedDocument {
                    message: format!("element <{}> follows the document root", kind.tag()),
                    location: self.cursor.location(),
                });
            }
            if kind != NodeKind::Root {
                return Err(self.tree_error(TreeError::InvalidRoot(kind)));
            }
        }
        if let Some(parent) = self.stack.last() {
            parent.kind().check_child(kind).map_err(|e| self.tree_error(e))?;
        }

        let mut bag = self.cursor.attributes(start)?;
        if kind == NodeKind::Root {
            // The external sheet must be resolved before attributes that name its fonts or colors.
            if let Some(sheet) = bag.get("style") {
                log::debug!("Loading style sheet '{}' via {}", sheet, self.provider.name());
                let source = self.provider.load_text(sheet)?;
                parse_style_sheet(&source, self.provider, &mut self.style)?;
            }
        }

        let mut node = Node::new(kind);
        assign(&mut node, &mut bag, &self.style.symbols).map_err(|e| self.tree_error(e))?;
        self.stack.push(node);
        if empty {
            self.close_node()?;
        }
        Ok(())
    }

    fn inline_style(&mut self, empty: bool) -> Result<(), ParseError> {
        let under_root = self.stack.len() == 1 && self.stack[0].kind() == NodeKind::Root;
        if !under_root {
            return Err(ParseError::StyleSheet {
                message: format!("<{}> is only allowed directly under <PdfDocument>", INLINE_STYLE_ELEMENT),
                location: self.cursor.location(),
            });
        }
        if !empty {
            StyleBlockParser::new(&mut self.cursor, self.provider, &mut self.style)
                .parse_content(INLINE_STYLE_ELEMENT)?;
        }
        Ok(())
    }

    fn close_node(&mut self) -> Result<(), ParseError> {
        let node = self.stack.pop().ok_or_else(|| ParseError::MalformedDocument {
            message: "closing tag without an open element".into(),
            location: self.cursor.location(),
        })?;
        match self.stack.last_mut() {
            Some(parent) => {
                let result = parent.add_child(node);
                result.map_err(|e| self.tree_error(e))
            }
            None => {
                self.root = Some(node);
                Ok(())
            }
        }
    }

    fn resolve_reference(&mut self, reference: &BytesRef<'_>) -> Result<(), ParseError> {
        let location = self.cursor.location();
        if let Some(c) = reference
            .resolve_char_ref()
            .map_err(|e| ParseError::MalformedDocument {
                message: e.to_string(),
                location,
            })?
        {
            self.pending_text.push(c);
            return Ok(());
        }
        let name = self.cursor.decode(reference)?;
        match resolve_predefined_entity(name) {
            Some(text) => {
                self.pending_text.push_str(text);
                Ok(())
            }
            None => Err(ParseError::MalformedDocument {
                message: format!("unknown entity '&{};'", name),
                location,
            }),
        }
    }

    /// Attaches accumulated character data to the innermost open node.
    fn flush_text(&mut self) -> Result<(), ParseError> {
        let text = std::mem::take(&mut self.pending_text);
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        let location = self.cursor.location();
        match self.stack.last_mut() {
            Some(node) => node
                .append_text(text)
                .map_err(|source| ParseError::Tree { source, location }),
            None => Err(ParseError::MalformedDocument {
                message: "character data outside the document root".into(),
                location,
            }),
        }
    }
}
