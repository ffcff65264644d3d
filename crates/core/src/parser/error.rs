//! Errors raised while reading templates and style sheets.
use folio_traits::ResourceError;
use folio_tree::TreeError;
use std::fmt;
use thiserror::Error;

/// Line and column of the reader when an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    /// Computes the 1-based line and column of byte offset `pos` in `source`.
    pub fn from_offset(source: &str, pos: usize) -> Self {
        let prefix = &source.as_bytes()[..pos.min(source.len())];
        let line = prefix.iter().filter(|b| **b == b'\n').count() + 1;
        let col = match prefix.iter().rposition(|b| *b == b'\n') {
            Some(nl) => prefix.len() - nl,
            None => prefix.len() + 1,
        };
        Self { line, col }
    }
}

impl From<(usize, usize)> for Location {
    fn from((line, col): (usize, usize)) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("XML parsing error at {location}: {source}")]
    Xml {
        source: quick_xml::Error,
        location: Location,
    },

    #[error("XML attribute parsing error at {location}: {message}")]
    XmlAttr { message: String, location: Location },

    #[error("UTF-8 conversion error at {location}: {source}")]
    Utf8 {
        source: std::str::Utf8Error,
        location: Location,
    },

    #[error("{source} ({location})")]
    Tree {
        source: TreeError,
        location: Location,
    },

    #[error("Failed to load resource: {0}")]
    Resource(#[from] ResourceError),

    #[error("Style sheet error at {location}: {message}")]
    StyleSheet { message: String, location: Location },

    #[error("Malformed document at {location}: {message}")]
    MalformedDocument { message: String, location: Location },
}

impl ParseError {
    /// The structural or attribute error behind this failure, if any.
    pub fn tree_error(&self) -> Option<&TreeError> {
        match self {
            ParseError::Tree { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::Xml { location, .. }
            | ParseError::XmlAttr { location, .. }
            | ParseError::Utf8 { location, .. }
            | ParseError::Tree { location, .. }
            | ParseError::StyleSheet { location, .. }
            | ParseError::MalformedDocument { location, .. } => Some(*location),
            ParseError::Resource(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_offset() {
        let source = "<a>\n  <b/>\n</a>";
        assert_eq!(Location::from_offset(source, 0), Location { line: 1, col: 1 });
        assert_eq!(Location::from_offset(source, 6), Location { line: 2, col: 3 });
        assert_eq!(Location::from_offset(source, 999).line, 3);
    }
}
