//! Composition contract for folio documents.
//!
//! The render driver never lays out text or writes bytes. It walks the document
//! tree and issues an ordered sequence of calls against a [`DocumentComposer`]:
//! - content values carry a fully resolved, flat [`StyleProperties`] bag
//! - [`RecordingComposer`] captures the call sequence for inspection and tests
//! - `utils` holds font-name and coordinate helpers shared by backends

mod error;
mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::ComposeError;
pub use recording::{CompositionCall, RecordingComposer};
pub use traits::DocumentComposer;
pub use types::{
    Block, CellContent, CellRole, DocumentSetup, ImageContent, LineContent, ListContent,
    ListItemContent, ParagraphContent, Placement, Region, RegionContent, ResolvedBorders,
    RowSetup, SpacerContent, StyleProperties, TableSetup, TextFieldContent, TextRun,
};
