pub mod color;
pub mod geometry;
pub mod property;

pub use color::Color;
pub use geometry::{FixedPosition, Margins, Side, UnitValue};
pub use property::Property;
