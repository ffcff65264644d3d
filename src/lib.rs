//! # folio
//!
//! Markup-driven document generation. A template is compiled once into an
//! immutable document tree, then rendered any number of times against bound
//! data through a [`DocumentComposer`].
//!
//! ```no_run
//! use folio::{DataValue, DocumentPipelineBuilder, Record};
//!
//! let pipeline = DocumentPipelineBuilder::new()
//!     .with_template_file("invoice.xml")?
//!     .build()?;
//! let data: DataValue = Record::new("Invoice").with_field("Customer", "ACME").into();
//! pipeline.render_to_file(Some(&data), "invoice.pdf")?;
//! # Ok::<(), folio::PipelineError>(())
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, DocumentPipelineBuilder};

pub use folio_binding::{Bindable, DataValue, FnFormatter, FormatterRegistry, PropertyFormatter, Record, Schema, TypeKey};
pub use folio_core::{RenderDefaults, TemplateDocument};
pub use folio_render_core::{CompositionCall, DocumentComposer, RecordingComposer};
pub use folio_render_lopdf::LopdfComposer;
pub use folio_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
pub use folio_traits::ResourceProvider;
