use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use notetaker::{
    Command, Config, DocumentFetcher, Highlighter, MarkdownRenderer, Viewer, init_logging,
    reconstruct_url, split_path,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbosity());
    config.validate().context("Invalid configuration")?;

    let fetcher =
        DocumentFetcher::new(config.fetch_options()).context("Failed to build HTTP client")?;
    let highlighter = Highlighter::with_theme(&config.theme)?;
    let viewer = Viewer::new(fetcher, MarkdownRenderer::new(highlighter))?;

    match config.command {
        Command::Serve { addr, default_url } => {
            let router = notetaker::router(Arc::new(viewer), &default_url);
            notetaker::serve(router, addr).await
        }
        Command::Render {
            segments,
            output,
            no_open,
        } => {
            let joined = segments.join("/");
            let url = reconstruct_url(&split_path(&joined));
            info!(%url, "Rendering document");

            let page = viewer.document_page(&url).await;
            fs::write(&output, page.markup.into_string())
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Generated: {}", output.display());

            if let Some(message) = page.state.error() {
                eprintln!("Warning: {}", message);
            }

            if !no_open && let Err(e) = open::that(&output) {
                warn!(error = %e, path = %output.display(), "Failed to open browser");
            }

            Ok(())
        }
    }
}
