//! API handlers module
//!
//! Read-only JSON endpoints under /api/. Field order of the serialized
//! structs is declaration order, so the documents are stable byte-for-byte
//! across identical requests.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

use crate::config::AppState;
use crate::handler::router::{not_found, RequestContext};
use crate::http;

/// Server information document returned by /api/info
#[derive(Serialize)]
struct ServerInfo<'a> {
    server: &'a str,
    ip: &'a str,
    port: u16,
    status: &'a str,
    owner: OwnerInfo<'a>,
}

/// Owner block of the info document
#[derive(Serialize)]
struct OwnerInfo<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    position: &'a str,
}

/// Dispatch /api/ requests, falling back to the not-found page
pub fn serve_api(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match ctx.path {
        "/api/info" => serve_info(state),
        _ => not_found(state),
    }
}

fn serve_info(state: &AppState) -> Response<Full<Bytes>> {
    let site = &state.config.site;
    let info = ServerInfo {
        server: &site.name,
        ip: &site.public_ip,
        port: state.config.server.port,
        status: "online",
        owner: OwnerInfo {
            name: &site.owner.name,
            email: &site.owner.email,
            company: &site.owner.company,
            position: &site.owner.position,
        },
    };

    http::build_json_response(&info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use hyper::StatusCode;

    fn state() -> AppState {
        let cfg = Config::load_from("nonexistent-config-for-tests").unwrap();
        AppState::new(&cfg)
    }

    #[test]
    fn test_info_endpoint() {
        let state = state();
        let ctx = RequestContext { path: "/api/info" };
        let resp = serve_api(&ctx, &state);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_unknown_api_path_falls_back() {
        let state = state();
        let ctx = RequestContext {
            path: "/api/missing",
        };
        let resp = serve_api(&ctx, &state);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
