//! Allow-list policies.

/// Static allow-list of tags, attributes and URL schemes.
///
/// Anything not listed is removed. Tags in `clean_content_tags` are dropped
/// together with their content; other disallowed tags are unwrapped and their
/// text kept.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    /// Tags kept in the output.
    pub tags: &'static [&'static str],
    /// Tags removed together with everything inside them.
    pub clean_content_tags: &'static [&'static str],
    /// Attributes permitted on every allowed tag.
    pub generic_attributes: &'static [&'static str],
    /// Attributes permitted only on the given tag.
    pub tag_attributes: &'static [(&'static str, &'static [&'static str])],
    /// Schemes permitted in `href`, `src` and `cite`. Relative URLs pass.
    pub url_schemes: &'static [&'static str],
    /// Value forced onto every link's `rel` attribute.
    pub link_rel: Option<&'static str>,
}

impl Policy {
    /// Policy for user generated content.
    ///
    /// Basic formatting, links, images, lists, tables and code. No scripts,
    /// styles, forms, frames, media or event handlers.
    pub const UGC: Policy = Policy {
        tags: &[
            "a",
            "abbr",
            "b",
            "bdi",
            "bdo",
            "blockquote",
            "br",
            "caption",
            "cite",
            "code",
            "col",
            "colgroup",
            "dd",
            "del",
            "details",
            "dfn",
            "div",
            "dl",
            "dt",
            "em",
            "figcaption",
            "figure",
            "h1",
            "h2",
            "h3",
            "h4",
            "h5",
            "h6",
            "hr",
            "i",
            "img",
            "ins",
            "kbd",
            "li",
            "mark",
            "ol",
            "p",
            "pre",
            "q",
            "rp",
            "rt",
            "ruby",
            "s",
            "samp",
            "small",
            "span",
            "strike",
            "strong",
            "sub",
            "summary",
            "sup",
            "table",
            "tbody",
            "td",
            "tfoot",
            "th",
            "thead",
            "time",
            "tr",
            "tt",
            "u",
            "ul",
            "var",
            "wbr",
        ],
        clean_content_tags: &["script", "style"],
        generic_attributes: &["dir", "lang", "title"],
        tag_attributes: &[
            ("a", &["href", "hreflang"]),
            ("blockquote", &["cite"]),
            ("col", &["span"]),
            ("colgroup", &["span"]),
            ("del", &["cite", "datetime"]),
            ("details", &["open"]),
            ("img", &["src", "alt", "width", "height"]),
            ("ins", &["cite", "datetime"]),
            ("ol", &["start", "reversed"]),
            ("q", &["cite"]),
            ("td", &["align", "colspan", "rowspan"]),
            ("th", &["align", "colspan", "rowspan", "scope"]),
            ("time", &["datetime"]),
        ],
        url_schemes: &["http", "https", "mailto"],
        link_rel: Some("nofollow noopener noreferrer"),
    };

    #[cfg(test)]
    fn allows_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|allowed| *allowed == tag)
    }
}
