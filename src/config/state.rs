// Application state module
// Read-only state shared across connection tasks

use std::sync::atomic::AtomicBool;

use super::types::Config;
use crate::routing::{portfolio_routes, Route};
use crate::site::assets::AssetStore;

/// Application state
///
/// Built once at startup; nothing here is written during dispatch, so
/// concurrent requests read it without synchronization.
pub struct AppState {
    pub config: Config,
    /// Ordered route table consulted on every dispatch
    pub routes: Vec<Route>,
    /// Embedded static assets, keyed by filename
    pub assets: AssetStore,

    // Cached config value for fast access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            routes: portfolio_routes(),
            assets: AssetStore::builtin(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
