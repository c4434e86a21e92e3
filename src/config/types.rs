// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub site: SiteConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
}

/// Site metadata rendered into pages and the info endpoint.
///
/// Deployment data, not behavior: handlers interpolate these values and
/// never hardcode them.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Display name of the site, reported as `server` by the info endpoint
    pub name: String,
    /// Public address shown in page footers and the info endpoint
    pub public_ip: String,
    pub owner: OwnerConfig,
    pub github_url: String,
    pub github_handle: String,
    pub linkedin_url: String,
}

/// Owner contact block
#[derive(Debug, Deserialize, Clone)]
pub struct OwnerConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
}
