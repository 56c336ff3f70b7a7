//! Remote markdown viewer for legal documents.

mod assets;
pub mod components;
mod config;
pub mod consent;
mod document;
mod fetch;
mod highlight;
mod logging;
mod markdown;
pub mod pages;
mod route;
pub mod server;
mod util;
mod viewer;

pub use config::{Command, Config, DEFAULT_DOCUMENT_URL};
pub use consent::{CONSENT_KEY, CONSENT_VALUE, ConsentGate, ConsentStore, CookieStore, MemoryStore};
pub use document::{DocumentState, FetchOutcome, Ticket};
pub use fetch::{DocumentFetcher, FetchError, FetchOptions};
pub use highlight::{DEFAULT_THEME, Highlighter};
pub use logging::{Verbosity, init_logging};
pub use markdown::{LinkResolver, MarkdownRenderer};
pub use route::{decode_segments, reconstruct_url, split_path, url_from_request};
pub use server::{router, serve};
pub use viewer::{Page, Viewer};
