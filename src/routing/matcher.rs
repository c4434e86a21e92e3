//! Route matching module
//!
//! The route table is an explicit ordered list of (match rule, target)
//! pairs. Matching is first-match-wins on the request path, byte-exact:
//! no trailing-slash, query string, or case normalization happens here.

/// Route matching rule: exact path or path prefix
#[derive(Debug, Clone, Default)]
pub struct RouteMatch {
    /// Exact path match (e.g., "/about")
    pub path: Option<String>,
    /// Path prefix match (e.g., "/static/")
    pub prefix: Option<String>,
}

impl RouteMatch {
    pub fn exact(path: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            prefix: None,
        }
    }

    pub fn prefix(prefix: &str) -> Self {
        Self {
            path: None,
            prefix: Some(prefix.to_string()),
        }
    }
}

/// Dispatch targets for matched routes
///
/// The not-found fallback is not a table entry; the dispatcher applies it
/// when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Home,
    About,
    Contact,
    StaticAssets,
    Api,
}

/// A single routing rule
#[derive(Debug, Clone)]
pub struct Route {
    pub match_rule: RouteMatch,
    pub target: RouteTarget,
}

impl Route {
    fn new(match_rule: RouteMatch, target: RouteTarget) -> Self {
        Self { match_rule, target }
    }
}

/// The portfolio route table, in match order.
///
/// Exact rules come before the prefix rules; the prefixes keep their
/// trailing slash, so "/staticx" and bare "/static" fall through to 404.
pub fn portfolio_routes() -> Vec<Route> {
    vec![
        Route::new(RouteMatch::exact("/"), RouteTarget::Home),
        Route::new(RouteMatch::exact("/home"), RouteTarget::Home),
        Route::new(RouteMatch::exact("/about"), RouteTarget::About),
        Route::new(RouteMatch::exact("/contact"), RouteTarget::Contact),
        Route::new(RouteMatch::prefix("/static/"), RouteTarget::StaticAssets),
        Route::new(RouteMatch::prefix("/api/"), RouteTarget::Api),
    ]
}

/// Find the first matching route for a given path
pub fn match_route<'a>(path: &str, routes: &'a [Route]) -> Option<&'a Route> {
    routes
        .iter()
        .find(|route| match_path(&route.match_rule, path))
}

/// Check if a path matches a route rule
pub fn match_path(rule: &RouteMatch, path: &str) -> bool {
    // Exact path match takes priority
    if let Some(exact) = &rule.path {
        return path == exact;
    }

    // Prefix match
    if let Some(prefix) = &rule.prefix {
        return path.starts_with(prefix);
    }

    // No path rule means match all
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_path_exact() {
        let rule = RouteMatch::exact("/about");
        assert!(match_path(&rule, "/about"));
        assert!(!match_path(&rule, "/about/"));
        assert!(!match_path(&rule, "/about/team"));
        assert!(!match_path(&rule, "/About"));
    }

    #[test]
    fn test_match_path_prefix() {
        let rule = RouteMatch::prefix("/api/");
        assert!(match_path(&rule, "/api/"));
        assert!(match_path(&rule, "/api/info"));
        assert!(match_path(&rule, "/api/v1/users"));
        assert!(!match_path(&rule, "/api"));
        assert!(!match_path(&rule, "/about"));
    }

    #[test]
    fn test_match_path_no_rule() {
        let rule = RouteMatch::default();
        assert!(match_path(&rule, "/anything"));
    }

    #[test]
    fn test_portfolio_table_targets() {
        let routes = portfolio_routes();

        let cases = [
            ("/", RouteTarget::Home),
            ("/home", RouteTarget::Home),
            ("/about", RouteTarget::About),
            ("/contact", RouteTarget::Contact),
            ("/static/style.css", RouteTarget::StaticAssets),
            ("/api/info", RouteTarget::Api),
            ("/api/missing", RouteTarget::Api),
        ];
        for (path, expected) in cases {
            let route = match_route(path, &routes).unwrap();
            assert_eq!(route.target, expected, "path {path}");
        }
    }

    #[test]
    fn test_portfolio_table_fallthrough() {
        let routes = portfolio_routes();

        assert!(match_route("/xyz", &routes).is_none());
        assert!(match_route("/homepage", &routes).is_none());
        assert!(match_route("/about/", &routes).is_none());
        // Prefix rules keep their trailing slash
        assert!(match_route("/static", &routes).is_none());
        assert!(match_route("/staticx", &routes).is_none());
        assert!(match_route("/api", &routes).is_none());
    }

    #[test]
    fn test_match_route_order() {
        // First applicable rule wins, regardless of later matches
        let routes = vec![
            Route::new(RouteMatch::exact("/api/info"), RouteTarget::Home),
            Route::new(RouteMatch::prefix("/api/"), RouteTarget::Api),
        ];

        let result = match_route("/api/info", &routes).unwrap();
        assert_eq!(result.target, RouteTarget::Home);

        let result = match_route("/api/other", &routes).unwrap();
        assert_eq!(result.target, RouteTarget::Api);
    }
}
