//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module renders fetched documents with comrak, resolves relative
//! links against the document URL, applies the fixed per-element style
//! rules and highlights fenced code blocks with syntect.

mod links;
mod renderer;
pub mod styles;

pub use links::LinkResolver;
pub use renderer::MarkdownRenderer;
