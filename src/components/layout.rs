//! Page layout wrapper and site header

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Product name shown in titles and the header.
pub const SITE_NAME: &str = "Lua Legal AI Notetaker";

const SITE_TITLE: &str = "Lua Legal AI Notetaker - Intelligent Legal Document Processor";
const SITE_DESCRIPTION: &str = "Advanced AI-powered notetaking tool for legal professionals. Transform markdown documents into structured legal notes with intelligent analysis and beautiful formatting.";
const SITE_KEYWORDS: &str = "legal, AI, notetaker, legal documents, markdown, legal analysis, document processing, legal tech";
const TAGLINE: &str = "A privacy-first AI meeting notetaker for lawyers";

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, viewport, metadata and the inlined stylesheet. The
/// caller provides page-specific body content.
///
/// # Arguments
///
/// * `stylesheet`: Bundled CSS inlined into the head
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(stylesheet: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no";
                meta name="description" content=(SITE_DESCRIPTION);
                meta name="keywords" content=(SITE_KEYWORDS);
                meta name="author" content="Lua Legal AI";
                title { (SITE_TITLE) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                style { (PreEscaped(stylesheet)) }
            }
            body {
                (body)
            }
        }
    }
}

/// Sticky header with brand and tagline
pub fn site_header() -> Markup {
    html! {
        header class="site-header" {
            div class="site-header-inner" {
                div class="brand" {
                    i class="ph ph-scales" {}
                    span { (SITE_NAME) }
                }
                span class="tagline" { (TAGLINE) }
            }
        }
    }
}
