use crate::value::TypeKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error("Property '{0}' not found in the bound data")]
    PropertyNotFound(String),

    #[error("Bound data must be a record, found {0}")]
    NotARecord(&'static str),

    #[error("Property '{property}' must be a sequence of records, found {found}")]
    NotASequence {
        property: String,
        found: &'static str,
    },

    #[error("Row {index} of '{property}' is not a record")]
    RowNotARecord { property: String, index: usize },

    #[error("Property '{property}' must hold bytes, found {found}")]
    NotBytes {
        property: String,
        found: &'static str,
    },

    #[error("'{element}' declares a format string without formatProperties")]
    MissingFormatProperties { element: String },

    #[error("'{element}' requires the '{attribute}' attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("No formatter registered for values of type '{0}'")]
    MissingFormatter(TypeKey),

    #[error("Format placeholder {{{index}}} has no argument ({count} given)")]
    PlaceholderOutOfRange { index: usize, count: usize },

    #[error("Malformed format string '{0}'")]
    MalformedFormat(String),
}
