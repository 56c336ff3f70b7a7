//! Bundled CSS and script assets

use anyhow::{Context, Result};

use crate::highlight::Highlighter;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/layout.css");
const DISPLAY: &str = include_str!("../assets/display.css");
const CONSENT: &str = include_str!("../assets/consent.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Script hiding the terms modal once the consent flag is stored.
pub const CONSENT_SCRIPT: &str = include_str!("../assets/consent.js");

/// Builds the stylesheet inlined into every page.
///
/// Pages are standalone files when written by `render`, so the site styles
/// and the highlighting theme travel inside the document.
///
/// # Errors
///
/// Returns error if the theme CSS cannot be generated.
pub fn stylesheet(highlighter: &Highlighter) -> Result<String> {
    let theme = highlighter
        .theme_css()
        .context("Failed to build highlighting stylesheet")?;

    Ok(bundle(&[BASE, LAYOUT, DISPLAY, CONSENT, MARKDOWN, &theme]))
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}
