//! Document composition from sanitized fragments.
//!
//! A composer wraps a [`SafeHtml`] fragment in a complete document, either the
//! built-in maud layout or a custom template loaded from disk. The template is
//! chosen once when the composer is built, so composing itself cannot fail.

mod custom;
mod layout;

pub use custom::CustomTemplate;
pub use layout::default_document;

use std::fs;
use std::path::PathBuf;

use crate::document::{Document, SafeHtml};
use crate::error::{Error, Result};

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Markdown Preview Tool";

/// Where the document template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Built-in layout.
    #[default]
    Default,
    /// Template file with `{{title}}` and `{{body}}` placeholders.
    Custom(PathBuf),
}

#[derive(Debug, Clone)]
enum Template {
    Builtin,
    Custom(CustomTemplate),
}

/// Composes complete HTML documents.
#[derive(Debug, Clone)]
pub struct Composer {
    template: Template,
}

impl Composer {
    /// Builds a composer for the given template source.
    ///
    /// Custom templates are read and parsed here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the template file cannot be read and
    /// [`Error::Template`] if its content is malformed.
    pub fn new(source: &TemplateSource) -> Result<Self> {
        let template = match source {
            TemplateSource::Default => Template::Builtin,
            TemplateSource::Custom(path) => {
                let content = fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                let parsed = CustomTemplate::parse(&content).map_err(|issue| Error::Template {
                    path: path.clone(),
                    issue,
                })?;
                Template::Custom(parsed)
            }
        };

        Ok(Self { template })
    }

    /// Composes a document from title and sanitized body.
    pub fn compose(&self, title: &str, body: &SafeHtml) -> Document {
        let html = match &self.template {
            Template::Builtin => default_document(title, body).into_string(),
            Template::Custom(template) => template.render(title, body),
        };
        Document::new(html)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            template: Template::Builtin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Placeholder, TemplateIssue};
    use crate::sanitize::Sanitizer;
    use tempfile::TempDir;

    #[test]
    fn test_compose_default_template() {
        // Arrange
        let composer = Composer::new(&TemplateSource::Default).expect("Default never fails");
        let body = Sanitizer::default().sanitize("<p>body</p>");

        // Act
        let document = composer.compose(DEFAULT_TITLE, &body);

        // Assert
        assert!(document.as_str().starts_with("<!DOCTYPE html>"));
        assert!(
            document
                .as_str()
                .contains("<title>Markdown Preview Tool</title>")
        );
        assert!(document.as_str().contains("<p>body</p>"));
    }

    #[test]
    fn test_compose_custom_template_from_file() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("page.html");
        fs::write(&path, "<h1>{{ title }}</h1>\n<article>{{ body }}</article>\n")
            .expect("Should write template");
        let composer = Composer::new(&TemplateSource::Custom(path)).expect("Should load template");
        let body = Sanitizer::default().sanitize("<p>text</p>");

        // Act
        let document = composer.compose("Custom", &body);

        // Assert
        assert_eq!(
            document.as_str(),
            "<h1>Custom</h1>\n<article><p>text</p></article>\n"
        );
    }

    #[test]
    fn test_composer_missing_template_file() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("absent.html");

        // Act
        let result = Composer::new(&TemplateSource::Custom(path.clone()));

        // Assert
        match result {
            Err(Error::Read { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_composer_template_missing_body() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("broken.html");
        fs::write(&path, "<title>{{title}}</title>").expect("Should write template");

        // Act
        let result = Composer::new(&TemplateSource::Custom(path));

        // Assert
        assert!(
            matches!(
                result,
                Err(Error::Template {
                    issue: TemplateIssue::MissingPlaceholder(Placeholder::Body),
                    ..
                })
            ),
            "Expected missing body error, got {:?}",
            result
        );
    }

    #[test]
    fn test_template_source_default() {
        assert_eq!(TemplateSource::default(), TemplateSource::Default);
    }
}
