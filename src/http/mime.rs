//! MIME type detection module
//!
//! Returns the Content-Type for a static asset based on its file extension.
//! Unknown extensions are served as plain text.

use std::path::Path;

/// Get MIME Content-Type based on file extension
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("css") => "text/css",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        _ => "text/plain",
    }
}

/// Get MIME Content-Type for a filename
pub fn content_type_for(filename: &str) -> &'static str {
    get_content_type(Path::new(filename).extension().and_then(|e| e.to_str()))
}
