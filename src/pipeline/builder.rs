// src/pipeline/builder.rs
use super::orchestrator::DocumentPipeline;
use crate::error::PipelineError;
use folio_binding::{DataValue, FormatterRegistry, PropertyFormatter, TypeKey};
use folio_core::{RenderDefaults, TemplateDocument};
use folio_resource::FilesystemResourceProvider;
use folio_traits::ResourceProvider;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a `DocumentPipeline`.
pub struct DocumentPipelineBuilder {
    template_source: Option<String>,
    resource_base_path: PathBuf,
    provider: Option<Arc<dyn ResourceProvider>>,
    formatters: FormatterRegistry,
    defaults: RenderDefaults,
}

impl Default for DocumentPipelineBuilder {
    fn default() -> Self {
        Self {
            template_source: None,
            resource_base_path: PathBuf::new(),
            provider: None,
            formatters: FormatterRegistry::with_defaults(),
            defaults: RenderDefaults::default(),
        }
    }
}

impl DocumentPipelineBuilder {
    /// Creates a builder with the built-in formatters and render defaults.
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the template from a file. Unless a provider is configured, the
    /// resources it names are resolved relative to the file's directory.
    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read template from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.resource_base_path = path_ref.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        self.template_source = Some(source);
        Ok(self)
    }

    /// Uses template markup held in memory. Resources resolve against the current directory.
    pub fn with_template_source(mut self, source: impl Into<String>) -> Self {
        self.template_source = Some(source.into());
        self.resource_base_path = PathBuf::new();
        self
    }

    /// Loads style sheets, fonts and images through `provider` instead of the filesystem.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_formatter(mut self, formatter: impl PropertyFormatter + 'static) -> Self {
        self.formatters.register(formatter);
        self
    }

    /// Registers a closure formatter for `key` at the default priority.
    pub fn with_format_fn<F>(mut self, key: TypeKey, f: F) -> Self
    where
        F: Fn(&DataValue) -> String + Send + Sync + 'static,
    {
        self.formatters.register_fn(key, f);
        self
    }

    pub fn with_defaults(mut self, defaults: RenderDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Consumes the builder, compiling the template into a `DocumentPipeline`.
    pub fn build(mut self) -> Result<DocumentPipeline, PipelineError> {
        let source = self.template_source.take().ok_or_else(|| {
            PipelineError::Config(
                "No template has been configured. Use `with_template_file` or `with_template_source`.".to_string(),
            )
        })?;

        let provider: Arc<dyn ResourceProvider> = match self.provider.take() {
            Some(provider) => provider,
            None if self.resource_base_path.as_os_str().is_empty() => Arc::new(FilesystemResourceProvider::new(".")),
            None => Arc::new(FilesystemResourceProvider::new(&self.resource_base_path)),
        };
        log::info!("Compiling template with resources from {}", provider.name());

        let document = TemplateDocument::parse(&source, provider.as_ref())?;
        log::info!("Template compiled: {} page(s)", document.page_count());

        Ok(DocumentPipeline::new(
            Arc::new(document),
            provider,
            self.formatters,
            self.defaults,
        ))
    }
}
