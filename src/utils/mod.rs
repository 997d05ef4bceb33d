//! Utility functions shared across modules.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Static regex compilation

mod pattern;
mod selector;

pub use pattern::compile_regex_unsafe;
pub use selector::parse_selector_unsafe;
