//! Markdown rendering with GitHub Flavored Markdown tables.
//!
//! This module converts Markdown source to an untrusted HTML fragment using
//! comrak. Raw HTML embedded in the source is passed through unchanged; the
//! sanitizer is responsible for filtering it.

mod renderer;

pub use renderer::MarkdownRenderer;
