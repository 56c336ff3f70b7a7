//! Fetch, render and page assembly shared by `serve` and `render`.

use anyhow::{Context, Result};
use maud::Markup;
use tracing::{error, info};

use crate::assets;
use crate::components::display::DocumentView;
use crate::document::{DocumentState, FetchOutcome};
use crate::fetch::DocumentFetcher;
use crate::markdown::MarkdownRenderer;
use crate::pages;

/// A generated page and the fetch state it was built from.
#[derive(Debug)]
pub struct Page {
    pub state: DocumentState,
    pub markup: Markup,
}

impl Page {
    /// Whether the page shows an error instead of a document.
    pub fn is_failure(&self) -> bool {
        self.state.error().is_some()
    }
}

/// Owns the HTTP client, the markdown renderer and the bundled stylesheet.
pub struct Viewer {
    fetcher: DocumentFetcher,
    renderer: MarkdownRenderer,
    stylesheet: String,
}

impl Viewer {
    /// # Errors
    ///
    /// Returns error if the stylesheet for the renderer's theme cannot be
    /// generated.
    pub fn new(fetcher: DocumentFetcher, renderer: MarkdownRenderer) -> Result<Self> {
        let stylesheet = assets::stylesheet(renderer.highlighter())
            .context("Failed to bundle stylesheet")?;

        Ok(Self {
            fetcher,
            renderer,
            stylesheet,
        })
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Maps fetch state to what the display area shows.
    ///
    /// Successful fetches are rendered here; a rendering failure is shown
    /// like a fetch failure. An empty body shows nothing.
    pub fn view(&self, state: &DocumentState) -> DocumentView {
        match (state.outcome(), state.url()) {
            (FetchOutcome::Pending, _) => DocumentView::Loading,
            (FetchOutcome::Failure(message), _) => DocumentView::Failed(message.clone()),
            (FetchOutcome::Success(text), Some(url)) if !text.is_empty() => {
                match self.renderer.render_with_base(text, url) {
                    Ok(html) => DocumentView::Rendered {
                        source: url.to_string(),
                        html,
                    },
                    Err(e) => {
                        error!(%url, error = ?e, "Failed to render document");
                        DocumentView::Failed(format!("Failed to render document: {:#}", e))
                    }
                }
            }
            _ => DocumentView::Idle,
        }
    }

    /// Fetches `url` and builds the home page around it.
    pub async fn home_page(&self, url: &str, show_consent: bool) -> Page {
        let state = self.fetcher.load(url).await;
        let markup = pages::home::generate(&self.stylesheet, &self.view(&state), show_consent);

        log_outcome(url, &state);
        Page { state, markup }
    }

    /// Fetches `url` and builds the document page around it.
    pub async fn document_page(&self, url: &str) -> Page {
        let state = self.fetcher.load(url).await;
        let markup = pages::document::generate(&self.stylesheet, url, &self.view(&state));

        log_outcome(url, &state);
        Page { state, markup }
    }
}

fn log_outcome(url: &str, state: &DocumentState) {
    match state.outcome() {
        FetchOutcome::Success(text) => info!(%url, bytes = text.len(), "Rendered document"),
        FetchOutcome::Failure(message) => info!(%url, %message, "Document unavailable"),
        FetchOutcome::Idle | FetchOutcome::Pending => {}
    }
}
