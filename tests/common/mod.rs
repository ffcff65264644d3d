#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use folio::{
    DataValue, DocumentPipeline, DocumentPipelineBuilder, InMemoryResourceProvider, PipelineError,
    RecordingComposer,
};
use lopdf::Document as LopdfDocument;
use std::io::Cursor;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Compile a template whose resources all come from `provider`.
pub fn pipeline_with(template: &str, provider: InMemoryResourceProvider) -> Result<DocumentPipeline, PipelineError> {
    DocumentPipelineBuilder::new()
        .with_template_source(template)
        .with_resource_provider(Arc::new(provider))
        .build()
}

pub fn pipeline(template: &str) -> Result<DocumentPipeline, PipelineError> {
    pipeline_with(template, InMemoryResourceProvider::new())
}

/// Compile and render a template, capturing the composition calls.
pub fn record(template: &str, data: Option<&DataValue>) -> Result<RecordingComposer, PipelineError> {
    pipeline(template)?.record(data)
}

/// Compile and render a template to PDF with the lopdf composer.
pub fn generate_pdf(template: &str, data: Option<&DataValue>) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let writer = pipeline(template)?.render_to_writer(data, Cursor::new(Vec::new()))?;
    GeneratedPdf::from_bytes(writer.into_inner())
}
