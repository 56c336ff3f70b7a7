//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;
use tracing::debug;

use super::{LinkResolver, styles};
use crate::highlight::Highlighter;
use crate::util::{decode_html, escape_html};

const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Renders markdown to styled HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists and footnotes. Raw HTML embedded in documents is omitted since
/// documents come from arbitrary URLs. Every element receives the classes of
/// the fixed style rule set and fenced code blocks are highlighted with
/// syntect using CSS classes.
pub struct MarkdownRenderer {
    highlighter: Highlighter,
}

impl MarkdownRenderer {
    /// Creates renderer highlighting code with `highlighter`.
    pub fn new(highlighter: Highlighter) -> Self {
        Self { highlighter }
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Renders markdown content to HTML string.
    ///
    /// Relative links are left as written.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        self.render_html(content, None)
    }

    /// Renders markdown fetched from `base_url`.
    ///
    /// Relative links and images resolve against `base_url`. When the base
    /// is not an absolute URL, links are left untouched.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render_with_base(&self, content: &str, base_url: &str) -> Result<String> {
        let resolver = LinkResolver::new(base_url)
            .inspect_err(|e| debug!(error = %e, "Skipping link resolution"))
            .ok();

        self.render_html(content, resolver.as_ref())
    }

    fn render_html(&self, content: &str, resolver: Option<&LinkResolver>) -> Result<String> {
        let mut html = comrak::markdown_to_html(content, &Self::options());

        if let Some(resolver) = resolver {
            html = resolver.rewrite(&html);
        }

        let html = styles::apply(&html);

        self.highlight_code_blocks(&html)
    }

    /// GFM extensions, smart punctuation, no raw HTML passthrough.
    fn options<'c>() -> Options<'c> {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        options.parse.smart = true;

        options.render.unsafe_ = false;

        options
    }

    /// Replaces the text of `<code class="language-X">` blocks with
    /// highlighted markup.
    ///
    /// The language is the leading run of word characters after
    /// `language-`; a block without one is left as plain text. One trailing
    /// newline is stripped from the code.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(found) = html[search_pos..].find(CODE_OPEN) {
            let code_start = search_pos + found;
            let class_start = code_start + CODE_OPEN.len();

            let Some(class_end) = html[class_start..].find('"').map(|p| class_start + p) else {
                search_pos = class_start;
                continue;
            };

            let Some(content_start) = html[class_end..].find('>').map(|p| class_end + p + 1)
            else {
                search_pos = class_start;
                continue;
            };

            let Some(content_end) = html[content_start..]
                .find(CODE_CLOSE)
                .map(|p| content_start + p)
            else {
                search_pos = class_start;
                continue;
            };

            let language = leading_word(&html[class_start..class_end]);
            let code = decode_html(&html[content_start..content_end]);
            let code = code.strip_suffix('\n').unwrap_or(&code);

            let body = match self
                .highlighter
                .highlight(code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?
            {
                Some(highlighted) => highlighted,
                None => escape_html(code),
            };

            result.push_str(&html[last_end..content_start]);
            result.push_str(&body);
            result.push_str(CODE_CLOSE);

            last_end = content_end + CODE_CLOSE.len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);

        Ok(result)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(Highlighter::default())
    }
}

/// Leading run of ASCII word characters (`[A-Za-z0-9_]`).
fn leading_word(class: &str) -> &str {
    let end = class
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(class.len());
    &class[..end]
}
