//! Document page generation for URLs taken from the request path

use maud::{Markup, html};

use crate::components::display::{DocumentView, markdown_display};
use crate::components::layout::{page_wrapper, site_header};

/// Generates the document page
///
/// Shows the URL being processed above the display area, even when the URL
/// is empty.
///
/// # Arguments
///
/// * `stylesheet`: Bundled CSS
/// * `url`: Reconstructed document URL
/// * `view`: Display state of the document
///
/// # Returns
///
/// Complete HTML document
pub fn generate(stylesheet: &str, url: &str, view: &DocumentView) -> Markup {
    page_wrapper(
        stylesheet,
        html! {
            (site_header())
            main class="site-main" {
                div class="content" {
                    div class="url-banner" {
                        strong { "Processing URL:" }
                        " "
                        (url)
                    }
                    (markdown_display(view))
                }
            }
        },
    )
}
