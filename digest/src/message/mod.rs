//! Message module
//!
//! Digest rendering and MarkdownV2 escaping.

pub mod escape;
pub mod renderer;

pub use escape::escape_markdown;
pub use renderer::render_digest;
