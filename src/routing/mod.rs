//! Routing module
//!
//! Ordered route table and path matching.

pub mod matcher;

pub use matcher::{match_path, match_route, portfolio_routes, Route, RouteMatch, RouteTarget};
