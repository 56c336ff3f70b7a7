//! Page generation modules for the two routes
//!
//! The home page shows the default document behind the terms modal; the
//! document page shows a document addressed by the request path.

pub mod document;
pub mod home;
