//! HTTP protocol layer module
//!
//! Protocol-level helpers decoupled from the page and asset handlers.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_asset_response, build_html_response, build_json_response};
