//! The render driver: walks a compiled template and issues composition calls.

pub mod cascade;
pub mod defaults;
pub mod driver;
pub mod error;
pub mod text;

pub use cascade::{effective_style, resolve_style};
pub use defaults::RenderDefaults;
pub use driver::RenderDriver;
pub use error::RenderError;
pub use text::resolve_text;
