pub mod assign;
pub mod bag;
pub mod builder;
pub mod cursor;
pub mod error;
pub mod stylesheet_parser;

pub use bag::PropertyBag;
pub use builder::TemplateParser;
pub use error::{Location, ParseError};
