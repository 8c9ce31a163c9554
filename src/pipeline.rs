//! Render, sanitize and compose in one pass.

use crate::document::Document;
use crate::error::Result;
use crate::markdown::MarkdownRenderer;
use crate::sanitize::{Policy, Sanitizer};
use crate::template::{Composer, DEFAULT_TITLE, TemplateSource};

/// Options controlling document composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub template: TemplateSource,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template: TemplateSource::Default,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Markdown to HTML document pipeline.
///
/// Immutable once built. A single pipeline can convert any number of
/// documents; nothing is carried between runs.
pub struct Pipeline {
    renderer: MarkdownRenderer,
    sanitizer: Sanitizer,
    composer: Composer,
    title: String,
}

impl Pipeline {
    /// Builds pipeline for the given options.
    ///
    /// # Errors
    ///
    /// Returns error if a custom template cannot be read or parsed.
    pub fn new(options: &RenderOptions) -> Result<Self> {
        Ok(Self {
            renderer: MarkdownRenderer::new(),
            sanitizer: Sanitizer::new(&Policy::UGC),
            composer: Composer::new(&options.template)?,
            title: options.title.clone(),
        })
    }

    /// Converts Markdown source to a complete HTML document.
    pub fn run(&self, markdown: &[u8]) -> Document {
        let rendered = self.renderer.render(markdown);
        let safe = self.sanitizer.sanitize(rendered.as_str());
        self.composer.compose(&self.title, &safe)
    }
}

/// Converts Markdown source with the given options.
///
/// # Errors
///
/// Returns error if a custom template cannot be read or parsed. No output is
/// produced in that case.
pub fn parse_content(markdown: &[u8], options: &RenderOptions) -> Result<Document> {
    Ok(Pipeline::new(options)?.run(markdown))
}
