//! Shared test utilities for integration tests.
//!
//! Starts an in-process upstream that serves markdown documents on a
//! loopback port, so fetch and render paths run without the internet.

#![allow(dead_code)]

use anyhow::Result;
use axum::Router;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use notetaker::{DocumentFetcher, FetchOptions, MarkdownRenderer, Viewer};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Markdown served at `/docs/doc.md`.
pub const SAMPLE_MARKDOWN: &str = r#"# Engagement Letter

This letter sets out the **scope** of our work. See the [terms](terms.md)
and the [firm website](https://example.org).

- Discovery
- Depositions

```rust
fn main() {
    println!("retainer");
}
```

| Task | Hours |
|------|-------|
| Review | 3 |
"#;

/// Loopback document server, stopped on drop.
pub struct Upstream {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Upstream {
    /// Binds an ephemeral port and starts serving.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot be bound.
    pub async fn start() -> Result<Self> {
        let app = Router::new()
            .route("/docs/doc.md", get(|| async { SAMPLE_MARKDOWN }))
            .route("/docs/empty.md", get(|| async { "" }))
            .route(
                "/docs/echo.md",
                get(|RawQuery(query): RawQuery| async move {
                    format!("# Query {}", query.unwrap_or_default())
                }),
            )
            .route(
                "/docs/broken.md",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, handle })
    }

    /// Absolute URL of `path` on this upstream.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for Upstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Viewer with the default theme that ignores system proxy settings.
///
/// # Errors
///
/// Returns error if the client or stylesheet cannot be built.
pub fn test_viewer() -> Result<Viewer> {
    let fetcher = DocumentFetcher::new(FetchOptions {
        system_proxy: false,
        ..FetchOptions::default()
    })?;

    Viewer::new(fetcher, MarkdownRenderer::default())
}
