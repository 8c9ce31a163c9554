//! HTML sanitization against a static allow-list.
//!
//! Rendered Markdown is untrusted: authors can embed arbitrary HTML. The
//! sanitizer parses the fragment with ammonia and rebuilds it keeping only
//! what the [`Policy`] permits.

mod policy;

pub use policy::Policy;

use ammonia::Builder;
use std::collections::{HashMap, HashSet};

use crate::document::SafeHtml;

/// Filters untrusted HTML through an allow-list [`Policy`].
pub struct Sanitizer {
    builder: Builder<'static>,
}

impl Sanitizer {
    /// Creates sanitizer enforcing the given policy.
    pub fn new(policy: &Policy) -> Self {
        let tag_attributes: HashMap<&'static str, HashSet<&'static str>> = policy
            .tag_attributes
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect();

        let mut builder = Builder::default();
        builder
            .tags(policy.tags.iter().copied().collect())
            .clean_content_tags(policy.clean_content_tags.iter().copied().collect())
            .generic_attributes(policy.generic_attributes.iter().copied().collect())
            .tag_attributes(tag_attributes)
            .url_schemes(policy.url_schemes.iter().copied().collect())
            .link_rel(policy.link_rel)
            .strip_comments(true);

        Self { builder }
    }

    /// Sanitizes an HTML fragment.
    ///
    /// Output is safe for direct embedding in a trusted document and is a
    /// fixed point: sanitizing it again yields the same string.
    pub fn sanitize(&self, html: &str) -> SafeHtml {
        let cleaned = self.builder.clean(html).to_string();
        SafeHtml::new(restore_pre_newlines(cleaned))
    }
}

/// Re-adds the newline the HTML parser drops right after a `<pre>` start tag.
///
/// Without it every pass strips one more leading newline from `<pre>`
/// content, so the output would not be a fixed point.
fn restore_pre_newlines(html: String) -> String {
    const PRE: &str = "<pre";

    if !html.contains(PRE) {
        return html;
    }

    let mut output = String::with_capacity(html.len() + 1);
    let mut rest = html.as_str();

    while let Some(start) = rest.find(PRE) {
        let after_name = &rest[start + PRE.len()..];
        if !after_name.starts_with(['>', ' ']) {
            output.push_str(&rest[..start + PRE.len()]);
            rest = after_name;
            continue;
        }

        let Some(close) = start_tag_end(after_name) else {
            break;
        };
        let content_start = start + PRE.len() + close + 1;
        output.push_str(&rest[..content_start]);
        rest = &rest[content_start..];

        if rest.starts_with('\n') {
            output.push('\n');
        }
    }

    output.push_str(rest);
    output
}

/// Offset of the `>` closing a serialized start tag, skipping quoted values.
fn start_tag_end(tag: &str) -> Option<usize> {
    let mut quoted = false;
    for (i, c) in tag.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '>' if !quoted => return Some(i),
            _ => {}
        }
    }
    None
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(&Policy::UGC)
    }
}
