//! HTTP surface of the viewer.
//!
//! `/` shows the default document behind the terms gate, `/_consent`
//! records dismissal for clients without scripts, and every other path is
//! reinterpreted as a document URL.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::components::consent::CONSENT_ACTION;
use crate::consent::{ConsentGate, CookieStore};
use crate::route::url_from_request;
use crate::viewer::{Page, Viewer};

#[derive(Clone)]
struct AppState {
    viewer: Arc<Viewer>,
    default_url: Arc<str>,
}

/// Builds the application router.
///
/// # Arguments
///
/// * `viewer`: Shared fetch and render pipeline
/// * `default_url`: Document shown on the home page
pub fn router(viewer: Arc<Viewer>, default_url: &str) -> Router {
    let state = AppState {
        viewer,
        default_url: Arc::from(default_url),
    };

    Router::new()
        .route("/", get(home))
        .route(CONSENT_ACTION, post(dismiss_terms))
        .route("/healthz", get(health_check))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .route("/*url", get(document))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `router` on `addr` until ctrl-c.
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails.
pub async fn serve(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(addr = %listener.local_addr()?, "Starting HTTP server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

fn cookie_store(headers: &HeaderMap) -> CookieStore {
    CookieStore::from_headers(
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok()),
    )
}

fn page_response(page: Page) -> Response {
    let status = if page.is_failure() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    (status, Html(page.markup.into_string())).into_response()
}

async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let gate = ConsentGate::new(cookie_store(&headers));
    let show_consent = gate.should_prompt();
    debug!(show_consent, "Home page requested");

    let page = state.viewer.home_page(&state.default_url, show_consent).await;
    page_response(page)
}

async fn dismiss_terms(headers: HeaderMap) -> Response {
    let mut gate = ConsentGate::new(cookie_store(&headers));
    gate.dismiss();

    let mut response = Redirect::to("/").into_response();
    for cookie in gate.store().set_cookie_headers() {
        match HeaderValue::from_str(cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Skipping invalid Set-Cookie value"),
        }
    }

    response
}

async fn document(State(state): State<AppState>, uri: Uri) -> Response {
    let url = url_from_request(uri.path(), uri.query());
    debug!(path = uri.path(), %url, "Document requested");

    let page = state.viewer.document_page(&url).await;
    page_response(page)
}

async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{DocumentFetcher, FetchOptions};
    use crate::markdown::MarkdownRenderer;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let fetcher = DocumentFetcher::new(FetchOptions {
            system_proxy: false,
            ..FetchOptions::default()
        })
        .expect("Should build fetcher");
        let viewer =
            Viewer::new(fetcher, MarkdownRenderer::default()).expect("Should build viewer");

        // Blank default document keeps the home page offline
        router(Arc::new(viewer), "")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Should read body");
        String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
    }

    #[tokio::test]
    async fn test_health_check() {
        // Act
        let response = test_router()
            .oneshot(Request::get("/healthz").body(Body::empty()).expect("Should build"))
            .await
            .expect("Should respond");

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_favicon_has_no_content() {
        let response = test_router()
            .oneshot(Request::get("/favicon.ico").body(Body::empty()).expect("Should build"))
            .await
            .expect("Should respond");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_home_prompts_without_flag() {
        // Act
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).expect("Should build"))
            .await
            .expect("Should respond");

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("id=\"tos-modal\""));
        assert!(html.contains("Lua Legal AI Notetaker"));
    }

    #[tokio::test]
    async fn test_home_skips_modal_with_flag() {
        // Arrange
        let request = Request::get("/")
            .header(COOKIE, "theme=dark; tosAccepted=true")
            .body(Body::empty())
            .expect("Should build");

        // Act
        let response = test_router().oneshot(request).await.expect("Should respond");

        // Assert
        let html = body_text(response).await;
        assert!(!html.contains("id=\"tos-modal\""), "{}", html);
    }

    #[tokio::test]
    async fn test_dismiss_sets_cookie_and_redirects() {
        // Arrange
        let request = Request::post(CONSENT_ACTION)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("choice=decline"))
            .expect("Should build");

        // Act
        let response = test_router().oneshot(request).await.expect("Should respond");

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").and_then(|v| v.to_str().ok()),
            Some("/")
        );
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("Should set cookie");
        assert!(cookie.starts_with("tosAccepted=true;"), "{}", cookie);
    }
}
