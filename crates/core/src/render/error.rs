use folio_binding::BindingError;
use folio_render_core::ComposeError;
use folio_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Data binding error: {0}")]
    Binding(#[from] BindingError),

    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}
