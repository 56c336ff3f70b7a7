//! Fixed per-element style rules for rendered markdown.
//!
//! comrak emits bare elements; every element listed in [`ELEMENT_STYLES`]
//! receives its class (merged with any class comrak already set), optional
//! extra attributes and an optional scrolling wrapper. Styles themselves
//! live in `assets/markdown.css`.

/// Style override for one HTML element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    pub tag: &'static str,
    pub class: &'static str,
    /// Class of a `div` wrapped around the element.
    pub wrapper: Option<&'static str>,
    pub attrs: &'static [(&'static str, &'static str)],
}

impl ElementStyle {
    const fn class(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class,
            wrapper: None,
            attrs: &[],
        }
    }

    const fn wrapped(tag: &'static str, class: &'static str, wrapper: &'static str) -> Self {
        Self {
            tag,
            class,
            wrapper: Some(wrapper),
            attrs: &[],
        }
    }
}

/// Attributes added to links that leave the page.
pub const EXTERNAL_LINK_ATTRS: &[(&str, &str)] =
    &[("target", "_blank"), ("rel", "noopener noreferrer")];

/// The fixed rule set.
pub const ELEMENT_STYLES: &[ElementStyle] = &[
    ElementStyle::class("h1", "md-h1"),
    ElementStyle::class("h2", "md-h2"),
    ElementStyle::class("h3", "md-h3"),
    ElementStyle::class("h4", "md-h4"),
    ElementStyle::class("p", "md-p"),
    ElementStyle::class("ul", "md-ul"),
    ElementStyle::class("ol", "md-ol"),
    ElementStyle::class("li", "md-li"),
    ElementStyle::class("blockquote", "md-blockquote"),
    ElementStyle {
        tag: "a",
        class: "md-link",
        wrapper: None,
        attrs: EXTERNAL_LINK_ATTRS,
    },
    ElementStyle::wrapped("table", "md-table", "md-table-scroll"),
    ElementStyle::class("th", "md-th"),
    ElementStyle::class("td", "md-td"),
    ElementStyle::wrapped("pre", "md-pre hljs-code", "md-code-scroll"),
    ElementStyle::class("code", "md-code-inline"),
];

/// Looks up the rule for a lowercase tag name.
pub fn style_for(tag: &str) -> Option<&'static ElementStyle> {
    ELEMENT_STYLES.iter().find(|style| style.tag == tag)
}

/// Applies [`ELEMENT_STYLES`] to comrak output.
///
/// `code` directly inside `pre` is a block and keeps comrak's
/// `language-*` class untouched for the highlighting pass. Fragment links
/// stay in the same tab.
pub fn apply(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 4);
    let mut rest = html;
    let mut after_pre = false;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('>') else {
            out.push_str(tail);
            return out;
        };

        let tag = &tail[..=end];
        rest = &tail[end + 1..];

        match parse_tag(tag) {
            Some((name, false)) => {
                let is_block_code = name == "code" && after_pre;
                after_pre = name == "pre";

                match style_for(&name) {
                    Some(style) if !is_block_code => {
                        if let Some(wrapper) = style.wrapper {
                            out.push_str("<div class=\"");
                            out.push_str(wrapper);
                            out.push_str("\">");
                        }
                        out.push_str(&decorate_open_tag(tag, &name, style));
                    }
                    _ => out.push_str(tag),
                }
            }
            Some((name, true)) => {
                after_pre = false;
                out.push_str(tag);
                if style_for(&name).is_some_and(|s| s.wrapper.is_some()) {
                    out.push_str("</div>");
                }
            }
            None => {
                after_pre = false;
                out.push_str(tag);
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the lowercase name of a tag and whether it is a closing tag.
///
/// Comments, doctypes and malformed tags yield `None`.
fn parse_tag(tag: &str) -> Option<(String, bool)> {
    let inner = tag.strip_prefix('<')?;
    let (inner, closing) = match inner.strip_prefix('/') {
        Some(stripped) => (stripped, true),
        None => (inner, false),
    };

    let name: String = inner
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect();

    if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    Some((name.to_ascii_lowercase(), closing))
}

fn decorate_open_tag(tag: &str, name: &str, style: &ElementStyle) -> String {
    let mut decorated = match tag.find("class=\"") {
        Some(pos) => {
            let insert_at = pos + "class=\"".len();
            format!("{}{} {}", &tag[..insert_at], style.class, &tag[insert_at..])
        }
        None => {
            let insert_at = 1 + name.len();
            format!(
                "{} class=\"{}\"{}",
                &tag[..insert_at],
                style.class,
                &tag[insert_at..]
            )
        }
    };

    if style.attrs.is_empty() || is_fragment_link(tag) {
        return decorated;
    }

    let close_len = if decorated.ends_with("/>") { 2 } else { 1 };
    let close_at = decorated.len() - close_len;
    let mut extra = String::new();
    for (attr, value) in style.attrs {
        if !tag.contains(&format!(" {}=", attr)) {
            extra.push_str(&format!(" {}=\"{}\"", attr, value));
        }
    }
    decorated.insert_str(close_at, &extra);

    decorated
}

fn is_fragment_link(tag: &str) -> bool {
    tag.contains("href=\"#")
}
