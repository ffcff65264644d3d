pub mod resource;

pub use resource::{InMemoryResourceProvider, ResourceBytes, ResourceError, ResourceProvider};
