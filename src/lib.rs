//! Markdown preview: render, sanitize and compose standalone HTML documents.

mod config;
mod document;
mod error;
pub mod files;
mod markdown;
mod pipeline;
pub mod preview;
pub mod sanitize;
pub mod template;

pub use config::Config;
pub use document::{Document, RenderedHtml, SafeHtml};
pub use error::{Error, Placeholder, Result, TemplateIssue};
pub use markdown::MarkdownRenderer;
pub use pipeline::{Pipeline, RenderOptions, parse_content};
pub use sanitize::{Policy, Sanitizer};
pub use template::{Composer, DEFAULT_TITLE, TemplateSource};
