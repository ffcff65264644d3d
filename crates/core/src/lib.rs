//! # folio-core
//!
//! Template compiler and render driver.
//!
//! - **parser**: markup and style-sheet parsing into a validated [`Node`] tree
//! - **document**: the compiled, immutable [`TemplateDocument`]
//! - **render**: style cascade, data binding and the walk that drives a
//!   [`DocumentComposer`]
//!
//! Nothing here touches the filesystem; every file a template refers to is
//! loaded through a [`ResourceProvider`].

// Re-export foundation crates
pub use folio_binding as binding;
pub use folio_render_core as composer;
pub use folio_style as style;
pub use folio_traits as traits;
pub use folio_tree as tree;
pub use folio_types as types;

pub mod document;
pub mod parser;
pub mod render;

pub use document::TemplateDocument;
pub use parser::{Location, ParseError};
pub use render::{RenderDefaults, RenderDriver, RenderError};

pub use folio_binding::{Bindable, DataValue, FormatterRegistry, Record, TypeKey};
pub use folio_render_core::{DocumentComposer, RecordingComposer};
pub use folio_traits::{InMemoryResourceProvider, ResourceError, ResourceProvider};
pub use folio_tree::{Node, NodeKind};
