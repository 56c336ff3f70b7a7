//! Link resolution against the URL a document was fetched from.

use anyhow::{Context, Result};
use url::Url;

use crate::util::{decode_html, escape_html};

/// Resolves relative links in a fetched document.
///
/// A README fetched from `https://host/org/repo/main/README.md` that embeds
/// `docs/logo.png` should load `https://host/org/repo/main/docs/logo.png`
/// rather than a path on the viewer itself.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    base: Url,
}

impl LinkResolver {
    /// Creates resolver for documents fetched from `base`.
    ///
    /// # Errors
    ///
    /// Returns error if `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("Invalid base URL: {}", base))?;
        Ok(Self { base })
    }

    /// Resolves a link target.
    ///
    /// Handles different link types:
    /// - Absolute URLs (any scheme, including `mailto:`) remain unchanged
    /// - Anchor links (#section) remain unchanged
    /// - Relative and root relative paths resolve against the base URL
    ///
    /// # Errors
    ///
    /// Returns error if the joined URL is invalid.
    pub fn resolve(&self, link: &str) -> Result<String> {
        if link.is_empty() || link.starts_with('#') {
            return Ok(link.to_string());
        }

        if Url::parse(link).is_ok() {
            return Ok(link.to_string());
        }

        let resolved = self
            .base
            .join(link)
            .with_context(|| format!("Failed to resolve link: {}", link))?;

        Ok(resolved.into())
    }

    /// Rewrites `href` of links and `src` of images in rendered HTML.
    ///
    /// Attribute values are entity-decoded before resolution and escaped
    /// again afterwards. Unresolvable links are left as they are.
    pub fn rewrite(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        while pos < html.len() {
            let link_pos = html[pos..].find("<a ");
            let img_pos = html[pos..].find("<img ");

            let (tag_start, is_image) = match (link_pos, img_pos) {
                (Some(l), Some(i)) if l < i => (pos + l, false),
                (Some(l), None) => (pos + l, false),
                (None, Some(i)) => (pos + i, true),
                (Some(_), Some(i)) => (pos + i, true),
                (None, None) => {
                    result.push_str(&html[pos..]);
                    break;
                }
            };

            result.push_str(&html[pos..tag_start]);

            let tag_end = html[tag_start..]
                .find('>')
                .map_or(html.len(), |p| tag_start + p);

            let attr = if is_image { "src=\"" } else { "href=\"" };
            let attr_start = match html[tag_start..tag_end].find(attr) {
                Some(p) => tag_start + p + attr.len(),
                None => {
                    result.push_str(&html[tag_start..tag_start + 1]);
                    pos = tag_start + 1;
                    continue;
                }
            };

            let attr_end = match html[attr_start..].find('"') {
                Some(p) => attr_start + p,
                None => {
                    result.push_str(&html[tag_start..attr_start]);
                    pos = attr_start;
                    continue;
                }
            };

            let raw = &html[attr_start..attr_end];
            let link = decode_html(raw);

            result.push_str(&html[tag_start..attr_start]);
            match self.resolve(&link) {
                Ok(resolved) if resolved != link => result.push_str(&escape_html(&resolved)),
                _ => result.push_str(raw),
            }

            pos = attr_end;
        }

        result
    }
}
