//! A thin wrapper over the quick-xml reader that tracks locations.

use super::bag::PropertyBag;
use super::error::{Location, ParseError};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

pub struct XmlCursor<'a> {
    content: &'a str,
    reader: Reader<&'a [u8]>,
    buf: Vec<u8>,
}

impl<'a> XmlCursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            reader: Reader::from_str(content),
            buf: Vec::new(),
        }
    }

    /// Reads the next XML event and enriches any error with location info.
    pub fn read_event(&mut self) -> Result<Event<'static>, ParseError> {
        self.buf.clear();
        let location = self.location();
        self.reader
            .read_event_into(&mut self.buf)
            .map(|e| e.into_owned())
            .map_err(|source| ParseError::Xml { source, location })
    }

    /// Consumes XML events until the end tag matching an already-read start tag.
    pub fn skip_element(&mut self) -> Result<(), ParseError> {
        let mut depth = 1;
        while depth > 0 {
            match self.read_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => {
                    return Err(ParseError::MalformedDocument {
                        message: "unexpected end of input inside a skipped element".into(),
                        location: self.location(),
                    });
                }
                _ => (),
            }
        }
        Ok(())
    }

    /// Calculates the current line and column number from the reader's position.
    pub fn location(&self) -> Location {
        let pos = usize::try_from(self.reader.buffer_position()).unwrap_or(usize::MAX);
        Location::from_offset(self.content, pos)
    }

    pub fn decode<'b>(&self, bytes: &'b [u8]) -> Result<&'b str, ParseError> {
        std::str::from_utf8(bytes).map_err(|source| ParseError::Utf8 {
            source,
            location: self.location(),
        })
    }

    pub fn tag_name(&self, start: &BytesStart<'_>) -> Result<String, ParseError> {
        Ok(self.decode(start.name().as_ref())?.to_string())
    }

    /// Collects the attributes of `start` into a bag, unescaping values.
    pub fn attributes(&self, start: &BytesStart<'_>) -> Result<PropertyBag, ParseError> {
        let mut bag = PropertyBag::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ParseError::XmlAttr {
                message: e.to_string(),
                location: self.location(),
            })?;
            let name = self.decode(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value().map_err(|e| ParseError::XmlAttr {
                message: e.to_string(),
                location: self.location(),
            })?;
            bag.push(name, value.into_owned());
        }
        Ok(bag)
    }
}
