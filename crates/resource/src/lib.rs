//! Resource providers backed by the local filesystem.
//!
//! The in-memory provider from `folio-traits` is re-exported so callers can
//! depend on this crate alone.

mod filesystem;

pub use filesystem::FilesystemResourceProvider;
pub use folio_traits::InMemoryResourceProvider;
