//! Terms of service modal

use maud::{Markup, PreEscaped, html};

use crate::assets::CONSENT_SCRIPT;

/// Path the modal form posts to when scripts are disabled.
pub const CONSENT_ACTION: &str = "/_consent";

const TERMS: &[(&str, &str)] = &[
    (
        "1. Acceptance of Terms",
        "By accessing and using Lua Legal AI Notetaker, you accept and agree to be bound by the terms and provision of this agreement. This application is designed for legal professionals to process and analyze legal documents using AI technology.",
    ),
    (
        "2. Professional Use License",
        "This application is licensed for professional legal use only. You are granted permission to use this AI-powered notetaking tool for legal document analysis, case preparation, and legal research purposes. This license does not constitute legal advice.",
    ),
    (
        "3. AI Processing Disclaimer",
        "The AI analysis and notetaking features are provided as tools to assist legal professionals. All AI-generated content should be reviewed and verified by qualified legal professionals. Lua Legal AI does not guarantee the accuracy, completeness, or legal validity of AI-generated analyses.",
    ),
    (
        "4. Document Confidentiality",
        "We understand the sensitive nature of legal documents. All documents processed through this application are handled with strict confidentiality. However, users are responsible for ensuring they have proper authorization to upload and process legal documents through this system.",
    ),
    (
        "5. Professional Responsibility",
        "Users must comply with all applicable legal professional responsibility rules and regulations. This includes maintaining client confidentiality, avoiding conflicts of interest, and ensuring competent representation. The use of this AI tool does not replace professional legal judgment.",
    ),
    (
        "6. Data Privacy & Security",
        "Your privacy and the security of legal documents are paramount. We implement industry-standard security measures to protect your data. Documents are processed temporarily for AI analysis and are not permanently stored unless explicitly requested. All processing complies with legal data protection requirements.",
    ),
    (
        "7. Limitations of AI Analysis",
        "While our AI provides sophisticated legal document analysis, it cannot replace human legal expertise. Users should independently verify all AI-generated insights, citations, and legal conclusions. The AI may not capture nuanced legal arguments or jurisdiction-specific variations.",
    ),
    (
        "8. Service Updates",
        "We continuously improve our AI capabilities and may update features, analysis methods, and terms of service. Users will be notified of significant changes that may affect their use of the application or the interpretation of AI-generated content.",
    ),
];

/// Renders the terms modal with its dismissal script
///
/// The overlay is visible without scripts; the script hides it when the
/// browser already stored the flag. Both buttons dismiss the modal.
pub fn terms_modal() -> Markup {
    html! {
        div id="tos-modal" class="tos-overlay" {
            div class="tos-dialog" role="dialog" aria-modal="true" aria-labelledby="tos-title" {
                div {
                    h2 id="tos-title" class="tos-title" {
                        "Terms of Service - Lua Legal AI Notetaker"
                    }
                    p class="tos-description" {
                        "Please read and accept our terms of service to continue using this legal AI notetaking application."
                    }
                }
                div class="tos-scroll" {
                    @for (heading, text) in TERMS {
                        section class="tos-section" {
                            h3 { (heading) }
                            p { (text) }
                        }
                    }
                }
                form class="tos-actions" method="post" action=(CONSENT_ACTION) {
                    button type="submit" name="choice" value="decline" class="button button-outline" {
                        "Decline"
                    }
                    button type="submit" name="choice" value="accept" class="button button-primary" {
                        "Accept & Continue"
                    }
                }
            }
        }
        script { (PreEscaped(CONSENT_SCRIPT)) }
    }
}
