//! Document generation pipeline.
//!
//! - [`DocumentPipelineBuilder`]: fluent builder that compiles the template once
//! - [`DocumentPipeline`]: renders the compiled template against bound data,
//!   either through any [`DocumentComposer`](folio_render_core::DocumentComposer)
//!   or straight to a PDF
//!
//! # Example
//!
//! ```ignore
//! use folio::DocumentPipelineBuilder;
//!
//! let pipeline = DocumentPipelineBuilder::new()
//!     .with_template_file("template.xml")?
//!     .build()?;
//!
//! pipeline.render_to_file(Some(&data), "output.pdf")?;
//! ```

mod builder;
mod orchestrator;

pub use builder::DocumentPipelineBuilder;
pub use orchestrator::DocumentPipeline;
