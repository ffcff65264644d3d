// src/pipeline/orchestrator.rs
use crate::error::PipelineError;
use folio_binding::{DataValue, FormatterRegistry};
use folio_core::{RenderDefaults, RenderDriver, TemplateDocument};
use folio_render_core::{DocumentComposer, RecordingComposer};
use folio_render_lopdf::LopdfComposer;
use folio_traits::ResourceProvider;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// A compiled template ready to be rendered.
///
/// The document is shared read-only, so one pipeline can be cloned and used
/// from several threads, each render with its own composer.
#[derive(Clone)]
pub struct DocumentPipeline {
    document: Arc<TemplateDocument>,
    provider: Arc<dyn ResourceProvider>,
    formatters: FormatterRegistry,
    defaults: RenderDefaults,
}

impl DocumentPipeline {
    pub(super) fn new(
        document: Arc<TemplateDocument>,
        provider: Arc<dyn ResourceProvider>,
        formatters: FormatterRegistry,
        defaults: RenderDefaults,
    ) -> Self {
        Self {
            document,
            provider,
            formatters,
            defaults,
        }
    }

    pub fn document(&self) -> &TemplateDocument {
        &self.document
    }

    /// Drives `composer` through one render of the template against `data`.
    pub fn render(&self, data: Option<&DataValue>, composer: &mut dyn DocumentComposer) -> Result<(), PipelineError> {
        RenderDriver::new(&self.document, &self.formatters, self.provider.as_ref(), &self.defaults)
            .render(data, composer)?;
        Ok(())
    }

    /// Renders into a [`RecordingComposer`] and returns the captured calls.
    pub fn record(&self, data: Option<&DataValue>) -> Result<RecordingComposer, PipelineError> {
        let mut composer = RecordingComposer::new();
        self.render(data, &mut composer)?;
        Ok(composer)
    }

    /// Renders a PDF into `writer` and hands the writer back.
    pub fn render_to_writer<W: Write>(&self, data: Option<&DataValue>, writer: W) -> Result<W, PipelineError> {
        let mut composer = LopdfComposer::new(writer);
        self.render(data, &mut composer)?;
        let writer = composer.into_inner().map_err(folio_core::RenderError::from)?;
        Ok(writer)
    }

    pub fn render_to_file<P: AsRef<Path>>(&self, data: Option<&DataValue>, path: P) -> Result<(), PipelineError> {
        let path = path.as_ref();
        log::info!("Writing PDF to {}", path.display());
        let file = File::create(path)?;
        let mut writer = self.render_to_writer(data, BufWriter::new(file))?;
        writer.flush()?;
        Ok(())
    }
}
