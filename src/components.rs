//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared by the home and
//! document pages.

pub mod consent;
pub mod display;
pub mod layout;
