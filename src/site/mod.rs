//! Site content module
//!
//! Page templates and the embedded static assets.

pub mod assets;
pub mod pages;
