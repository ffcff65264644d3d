//! Binding of runtime data into template text.
//!
//! A bound object is read into a flat [`PropertyMap`] of named [`DataValue`]s.
//! Typed values are turned into text through a [`FormatterRegistry`] keyed by
//! [`TypeKey`]; there is no implicit string conversion.

pub mod error;
pub mod format;
pub mod formatter;
pub mod map;
pub mod schema;
pub mod value;

pub use error::BindingError;
pub use format::substitute;
pub use formatter::{FnFormatter, FormatterRegistry, PropertyFormatter};
pub use map::PropertyMap;
pub use schema::{Accessor, Bindable, Schema};
pub use value::{DataValue, Record, TypeKey};

/// Re-exported so schemas can be declared as lazily-built statics.
pub use once_cell::sync::Lazy;
