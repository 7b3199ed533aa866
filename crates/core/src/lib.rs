pub mod config;
pub mod document;
pub mod error;
pub mod link;
pub mod logging;
pub mod render;
pub mod validate;

pub use config::RenderConfig;
pub use document::{Member, SignatureDocument};
pub use error::{Result, SigdocError};
pub use link::{MarkdownLinkRenderer, TypeLinker, render_markdown};
pub use render::{OutputFormat, render_document};
