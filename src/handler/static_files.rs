//! Static asset serving module
//!
//! Answers /static/ requests from the embedded asset table. Lookup is by
//! the final path segment only: directory components are discarded, never
//! honored, which is also the traversal boundary.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::handler::router::{not_found, RequestContext};
use crate::http::{self, mime};

/// Serve an embedded asset, or the not-found page on a miss
pub fn serve_asset(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let filename = basename(ctx.path);
    match state.assets.get(filename) {
        Some(content) => http::build_asset_response(content, mime::content_type_for(filename)),
        None => not_found(state),
    }
}

/// Final path segment of a request path
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}
