//! Document display cards
//!
//! Shows the loading indicator, the error line, or the rendered document
//! for one [`DocumentView`].

use maud::{Markup, PreEscaped, html};

/// What the display area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentView {
    /// Nothing requested, or the document was empty.
    Idle,
    Loading,
    /// One-line error replacing the content area.
    Failed(String),
    /// Rendered markdown with the URL it came from.
    Rendered { source: String, html: String },
}

/// Renders the display area
///
/// # Arguments
///
/// * `view`: Current display state
///
/// # Returns
///
/// Card markup, or an empty container when idle
pub fn markdown_display(view: &DocumentView) -> Markup {
    html! {
        div class="display" {
            @match view {
                DocumentView::Idle => {}
                DocumentView::Loading => { (loading_card()) }
                DocumentView::Failed(message) => { (error_card(message)) }
                DocumentView::Rendered { source, html: rendered } => {
                    (document_card(source, rendered))
                }
            }
        }
    }
}

fn loading_card() -> Markup {
    html! {
        div class="card card-loading" {
            div class="card-body" {
                div class="status-line" {
                    i class="ph ph-spinner spin" {}
                    span class="status-label" { "Loading document..." }
                }
            }
        }
    }
}

fn error_card(message: &str) -> Markup {
    html! {
        div class="card card-error" role="alert" {
            div class="card-body" {
                div class="status-line" {
                    i class="ph ph-warning-circle" {}
                    div {
                        span class="status-label" { "Error:" }
                        " "
                        span class="status-message" { (message) }
                    }
                }
            }
        }
    }
}

fn document_card(source: &str, rendered: &str) -> Markup {
    html! {
        article class="card card-document" {
            header class="document-header" {
                h2 class="document-title" {
                    i class="ph ph-file-text" {}
                    span { "AI-Processed Legal Document" }
                }
                p class="document-source" { "Source: " (source) }
                div class="badges" {
                    span class="badge badge-emerald" {
                        i class="ph ph-brain" {}
                        span { "AI Analysis Ready" }
                    }
                    span class="badge badge-blue" {
                        i class="ph ph-scales" {}
                        span { "Legal Processing" }
                    }
                }
            }
            div class="markdown" {
                (PreEscaped(rendered))
            }
        }
    }
}
