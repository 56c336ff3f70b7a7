//! Home page generation

use maud::{Markup, html};

use crate::components::consent::terms_modal;
use crate::components::display::{DocumentView, markdown_display};
use crate::components::layout::{page_wrapper, site_header};

/// Generates the home page
///
/// # Arguments
///
/// * `stylesheet`: Bundled CSS
/// * `view`: Display state of the default document
/// * `show_consent`: Whether the terms modal is included
///
/// # Returns
///
/// Complete HTML document
pub fn generate(stylesheet: &str, view: &DocumentView, show_consent: bool) -> Markup {
    page_wrapper(
        stylesheet,
        html! {
            @if show_consent {
                (terms_modal())
            }
            (site_header())
            main class="site-main" {
                div class="content" {
                    (markdown_display(view))
                }
            }
        },
    )
}
