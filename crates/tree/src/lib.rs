//! The element tree a template compiles into.
//!
//! Node kinds form a closed set. Parent/child legality and the attribute
//! traits of each kind are static tables on [`NodeKind`]; [`Node::add_child`]
//! is the one place the legality rule is enforced.

mod dump;
pub mod error;
pub mod kind;
pub mod node;
pub mod properties;

pub use error::TreeError;
pub use kind::{NodeKind, NodeTraits};
pub use node::{Node, TextContent};
pub use properties::{
    CellProperties, DataRowProperties, ImageProperties, KindProperties, LineProperties,
    ListProperties, RootProperties, RowProperties, SpacerProperties, TableProperties,
    TextFieldProperties,
};
