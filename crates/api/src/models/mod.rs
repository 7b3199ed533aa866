pub mod member;
pub mod type_ref;

pub use member::*;
pub use type_ref::*;
