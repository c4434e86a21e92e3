//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every request produces exactly
//! one response: the route table selects a handler, and the not-found page
//! covers everything the table rejects.

use crate::config::AppState;
use crate::handler::{api, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{match_route, RouteTarget};
use crate::site::pages;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_LENGTH, SERVER, USER_AGENT};
use hyper::{Request, Response, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Request context: the slice of the request the handlers consume
pub struct RequestContext<'a> {
    pub path: &'a str,
}

/// Main entry point for HTTP request handling
///
/// Dispatch is method-agnostic: the verb is recorded in the access log but
/// never selects a handler, so a POST to /home gets the same page as a GET.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.cached_access_log.load(Ordering::Relaxed);

    // hyper has already split the query string off; the router only ever
    // sees the bare path
    let path = req.uri().path();
    let ctx = RequestContext { path };

    let mut response = route_request(&ctx, &state);

    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    if access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().as_str().to_string(),
            path.to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        entry.user_agent = req
            .headers()
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a path through the table and invoke the selected handler
///
/// Total over all inputs: unmatched paths get the not-found page.
pub fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match match_route(ctx.path, &state.routes) {
        Some(route) => dispatch_target(ctx, route.target, state),
        None => not_found(state),
    }
}

fn dispatch_target(
    ctx: &RequestContext<'_>,
    target: RouteTarget,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let site = &state.config.site;
    match target {
        RouteTarget::Home => http::build_html_response(pages::render_home(site), StatusCode::OK),
        RouteTarget::About => http::build_html_response(pages::render_about(site), StatusCode::OK),
        RouteTarget::Contact => {
            http::build_html_response(pages::render_contact(site), StatusCode::OK)
        }
        RouteTarget::StaticAssets => static_files::serve_asset(ctx, state),
        RouteTarget::Api => api::serve_api(ctx, state),
    }
}

/// Not-found fallback shared by the dispatcher and the sub-handlers
pub fn not_found(state: &AppState) -> Response<Full<Bytes>> {
    http::build_html_response(
        pages::render_not_found(&state.config.site),
        StatusCode::NOT_FOUND,
    )
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
