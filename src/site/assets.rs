//! Embedded static assets module
//!
//! The asset table is built once at startup and never written afterwards,
//! so it is read concurrently without synchronization. Content is opaque
//! bytes; the content type is derived from the filename at serve time.

use hyper::body::Bytes;
use std::collections::HashMap;

/// Site stylesheet served at /static/style.css
const STYLE_CSS: &str = "\
body {
    font-family: Arial, sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
}
nav {
    background: #f4f4f4;
    padding: 10px;
    margin-bottom: 20px;
}
nav a {
    margin-right: 15px;
    text-decoration: none;
}
footer {
    margin-top: 20px;
    border-top: 1px solid #ccc;
    padding-top: 10px;
    font-size: 0.9em;
}
img {
    max-width: 100%;
    height: auto;
}
.contact-info, .social-links {
    background: #f9f9f9;
    padding: 15px;
    border-radius: 5px;
    margin: 15px 0;
}
ul {
    padding-left: 20px;
}
";

/// 1x1 transparent PNG
const LOGO_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15,
    0xC4, 0x89, //
    0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, //
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82, // IEND
];

/// Single empty page PDF
const SAMPLE_PDF: &[u8] = b"%PDF-1.4
1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj
2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj
3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >> endobj
trailer << /Root 1 0 R >>
%%EOF
";

/// Read-only table of embedded assets, keyed by filename
pub struct AssetStore {
    files: HashMap<&'static str, Bytes>,
}

impl AssetStore {
    /// Build the table of assets compiled into the binary
    pub fn builtin() -> Self {
        let mut files = HashMap::new();
        files.insert("style.css", Bytes::from_static(STYLE_CSS.as_bytes()));
        files.insert("logo.png", Bytes::from_static(LOGO_PNG));
        files.insert("sample.pdf", Bytes::from_static(SAMPLE_PDF));
        Self { files }
    }

    /// Look up an asset by filename (no path segments)
    ///
    /// The returned `Bytes` is a cheap reference-counted view.
    pub fn get(&self, filename: &str) -> Option<Bytes> {
        self.files.get(filename).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let store = AssetStore::builtin();
        assert_eq!(store.len(), 3);
        assert!(store.get("style.css").is_some());
        assert!(store.get("logo.png").is_some());
        assert!(store.get("sample.pdf").is_some());
        assert!(store.get("missing.txt").is_none());
    }

    #[test]
    fn test_lookup_is_filename_only() {
        let store = AssetStore::builtin();
        // Keys are bare filenames; anything path-like misses
        assert!(store.get("/static/style.css").is_none());
        assert!(store.get("static/style.css").is_none());
        assert!(store.get("../style.css").is_none());
        assert!(store.get("").is_none());
    }

    #[test]
    fn test_stylesheet_content() {
        let store = AssetStore::builtin();
        let css = store.get("style.css").unwrap();
        assert!(!css.is_empty());
        assert!(std::str::from_utf8(&css).unwrap().contains("font-family"));
    }

    #[test]
    fn test_logo_is_png() {
        let store = AssetStore::builtin();
        let png = store.get("logo.png").unwrap();
        assert!(png.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]));
    }

    #[test]
    fn test_sample_is_pdf() {
        let store = AssetStore::builtin();
        let pdf = store.get("sample.pdf").unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }
}
