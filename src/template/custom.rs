//! User supplied templates with `{{title}}` and `{{body}}` placeholders.

use maud::html;

use crate::document::SafeHtml;
use crate::error::{Placeholder, TemplateIssue};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Placeholder),
}

/// Parsed custom template.
///
/// Both placeholders must appear at least once. Whitespace inside the
/// delimiters is ignored, so `{{ body }}` and `{{body}}` are equivalent.
#[derive(Debug, Clone)]
pub struct CustomTemplate {
    segments: Vec<Segment>,
}

impl CustomTemplate {
    /// Parses template source.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an unclosed `{{`, an unknown
    /// placeholder name, or a missing required placeholder.
    pub fn parse(source: &str) -> Result<Self, TemplateIssue> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            let line = line_at(source, offset + start);
            let inner = &rest[start + OPEN.len()..];
            let end = inner.find(CLOSE).ok_or(TemplateIssue::Unclosed { line })?;

            let slot = match inner[..end].trim() {
                "title" => Placeholder::Title,
                "body" => Placeholder::Body,
                other => {
                    return Err(TemplateIssue::UnknownPlaceholder {
                        name: other.to_string(),
                        line,
                    });
                }
            };

            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            segments.push(Segment::Slot(slot));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        for required in [Placeholder::Title, Placeholder::Body] {
            if !segments.contains(&Segment::Slot(required)) {
                return Err(TemplateIssue::MissingPlaceholder(required));
            }
        }

        Ok(Self { segments })
    }

    /// Substitutes title and body.
    ///
    /// The title is HTML escaped; the body is inserted verbatim.
    pub fn render(&self, title: &str, body: &SafeHtml) -> String {
        let title = html! { (title) }.into_string();
        let mut output = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Slot(Placeholder::Title) => output.push_str(&title),
                Segment::Slot(Placeholder::Body) => output.push_str(body.as_str()),
            }
        }

        output
    }
}

/// One-based line number of a byte offset.
fn line_at(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}
