pub mod border;
pub mod page;
pub mod parsers;
pub mod stylesheet;
pub mod symbols;
pub mod text;

pub use border::{BorderInfo, BorderSet, BorderStyle};
pub use page::{PageOrientation, PageSize};
pub use parsers::ValueParseError;
pub use stylesheet::{DocumentStyle, StyleBundle, StyleSection};
pub use symbols::{FontData, SymbolTable};
pub use text::{HorizontalAlignment, TextAlignment, VerticalAlignment};
