//! Style-sheet blocks: named colors, fonts and per-kind style sections.
//!
//! The same content grammar is used inline (`<Style>` under the document root)
//! and in a separate resource whose root element is `<PdfDocumentStyle>`.
//! Sections are resolved by running ordinary attribute assignment on a
//! representative node of the section's kind.

use super::assign::assign;
use super::bag::PropertyBag;
use super::cursor::XmlCursor;
use super::error::ParseError;
use folio_style::parsers::parse_color;
use folio_style::{DocumentStyle, StyleSection};
use folio_traits::ResourceProvider;
use folio_tree::{Node, NodeKind};
use quick_xml::events::{BytesStart, Event};

pub const STYLE_SHEET_ROOT: &str = "PdfDocumentStyle";
pub const INLINE_STYLE_ELEMENT: &str = "Style";

/// Parses a style-sheet resource into `style`, adding to what it already holds.
pub fn parse_style_sheet(
    source: &str,
    provider: &dyn ResourceProvider,
    style: &mut DocumentStyle,
) -> Result<(), ParseError> {
    let mut cursor = XmlCursor::new(source);
    loop {
        match cursor.read_event()? {
            Event::Start(e) if e.name().as_ref() == STYLE_SHEET_ROOT.as_bytes() => {
                return StyleBlockParser::new(&mut cursor, provider, style).parse_content(STYLE_SHEET_ROOT);
            }
            Event::Empty(e) if e.name().as_ref() == STYLE_SHEET_ROOT.as_bytes() => return Ok(()),
            Event::Start(e) | Event::Empty(e) => {
                return Err(ParseError::StyleSheet {
                    message: format!(
                        "style sheet root must be <{}>, found <{}>",
                        STYLE_SHEET_ROOT,
                        cursor.tag_name(&e)?
                    ),
                    location: cursor.location(),
                });
            }
            Event::Eof => {
                return Err(ParseError::StyleSheet {
                    message: format!("could not find root <{}> element", STYLE_SHEET_ROOT),
                    location: cursor.location(),
                });
            }
            _ => (),
        }
    }
}

/// Reads style content up to the end tag `end_name` from an already-positioned cursor.
pub(crate) struct StyleBlockParser<'c, 'a> {
    cursor: &'c mut XmlCursor<'a>,
    provider: &'c dyn ResourceProvider,
    style: &'c mut DocumentStyle,
}

impl<'c, 'a> StyleBlockParser<'c, 'a> {
    pub(crate) fn new(
        cursor: &'c mut XmlCursor<'a>,
        provider: &'c dyn ResourceProvider,
        style: &'c mut DocumentStyle,
    ) -> Self {
        Self {
            cursor,
            provider,
            style,
        }
    }

    pub(crate) fn parse_content(mut self, end_name: &str) -> Result<(), ParseError> {
        loop {
            match self.cursor.read_event()? {
                Event::Start(e) => self.parse_child(&e, true)?,
                Event::Empty(e) => self.parse_child(&e, false)?,
                Event::End(e) if e.name().as_ref() == end_name.as_bytes() => return Ok(()),
                Event::Eof => {
                    return Err(ParseError::MalformedDocument {
                        message: format!("unexpected end of input inside <{}>", end_name),
                        location: self.cursor.location(),
                    });
                }
                _ => (),
            }
        }
    }

    fn parse_child(&mut self, start: &BytesStart<'_>, has_content: bool) -> Result<(), ParseError> {
        let name = self.cursor.tag_name(start)?;
        match name.as_str() {
            "Color" => {
                self.parse_color(start)?;
                self.skip_if(has_content)
            }
            "Font" => {
                self.parse_font(start)?;
                self.skip_if(has_content)
            }
            other => match StyleSection::from_element_name(other) {
                Some(section) => self.parse_section(section, has_content),
                None => {
                    log::warn!("Unhandled style sheet element <{}>; skipping it", other);
                    self.skip_if(has_content)
                }
            },
        }
    }

    fn skip_if(&mut self, has_content: bool) -> Result<(), ParseError> {
        if has_content {
            self.cursor.skip_element()?;
        }
        Ok(())
    }

    /// Reads the `name` and `value` of an element that must carry exactly those two.
    fn name_and(&self, start: &BytesStart<'_>, element: &str, second: &str) -> Result<(String, String), ParseError> {
        let bag = self.cursor.attributes(start)?;
        match (bag.len(), bag.get("name"), bag.get(second)) {
            (2, Some(name), Some(value)) => Ok((name.to_string(), value.to_string())),
            _ => Err(ParseError::StyleSheet {
                message: format!(
                    "<{}> requires exactly the attributes 'name' and '{}'",
                    element, second
                ),
                location: self.cursor.location(),
            }),
        }
    }

    fn parse_color(&mut self, start: &BytesStart<'_>) -> Result<(), ParseError> {
        let (name, value) = self.name_and(start, "Color", "value")?;
        let color = parse_color(&value, &self.style.symbols).map_err(|e| ParseError::StyleSheet {
            message: format!("color '{}': {}", name, e),
            location: self.cursor.location(),
        })?;
        log::debug!("Registered color '{}'", name);
        self.style.symbols.register_color(&name, color);
        Ok(())
    }

    fn parse_font(&mut self, start: &BytesStart<'_>) -> Result<(), ParseError> {
        let (name, path) = self.name_and(start, "Font", "path")?;
        let data = self.provider.load(&path)?;
        log::debug!("Registered font '{}' from '{}' ({} bytes)", name, path, data.len());
        self.style.symbols.register_font(name, data);
        Ok(())
    }

    fn push_entry(&self, start: &BytesStart<'_>, bag: &mut PropertyBag) -> Result<(), ParseError> {
        let (name, value) = self.name_and(start, "Entry", "value")?;
        bag.push(name, value);
        Ok(())
    }

    fn parse_section(&mut self, section: StyleSection, has_content: bool) -> Result<(), ParseError> {
        let location = self.cursor.location();
        let mut bag = PropertyBag::new();
        if has_content {
            loop {
                match self.cursor.read_event()? {
                    Event::Start(e) if e.name().as_ref() == b"Entry" => {
                        self.push_entry(&e, &mut bag)?;
                        self.cursor.skip_element()?;
                    }
                    Event::Empty(e) if e.name().as_ref() == b"Entry" => self.push_entry(&e, &mut bag)?,
                    Event::Start(e) => {
                        log::warn!(
                            "Unhandled element <{}> inside <{}>; skipping it",
                            self.cursor.tag_name(&e)?,
                            section.element_name()
                        );
                        self.cursor.skip_element()?;
                    }
                    Event::Empty(e) => {
                        log::warn!(
                            "Unhandled element <{}> inside <{}>",
                            self.cursor.tag_name(&e)?,
                            section.element_name()
                        );
                    }
                    Event::End(e) if e.name().as_ref() == section.element_name().as_bytes() => break,
                    Event::Eof => {
                        return Err(ParseError::MalformedDocument {
                            message: format!("unexpected end of input inside <{}>", section.element_name()),
                            location: self.cursor.location(),
                        });
                    }
                    _ => (),
                }
            }
        }

        let mut node = Node::new(NodeKind::for_section(section));
        assign(&mut node, &mut bag, &self.style.symbols)
            .map_err(|source| ParseError::Tree { source, location })?;
        log::debug!("Resolved style section <{}>", section.element_name());
        self.style.add_section(section, node.style);
        Ok(())
    }
}
