pub mod container;
pub mod models;
pub mod signature;

// Re-export commonly used types
pub use container::TypeContainer;
pub use models::*;
pub use signature::{Fragment, Signature, SignatureVisitor};
