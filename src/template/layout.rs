//! Built-in document layout

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::document::SafeHtml;

const STYLESHEET: &str = include_str!("../../assets/preview.css");

/// Wraps a sanitized fragment in the built-in HTML document.
///
/// Provides DOCTYPE, charset, viewport and an inline stylesheet so the result
/// renders without any external resources. The title is escaped as text; the
/// body is inserted verbatim.
///
/// # Arguments
///
/// * `title`: Document title text
/// * `body`: Sanitized body markup
///
/// # Returns
///
/// Complete HTML document
pub fn default_document(title: &str, body: &SafeHtml) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                main class="markdown-body" {
                    (PreEscaped(body.as_str()))
                }
            }
        }
    }
}
