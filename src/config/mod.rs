// Configuration module entry point
// Loads layered configuration and owns the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, OwnerConfig, PerformanceConfig, ServerConfig, SiteConfig,
};

impl Config {
    /// Load configuration from the default file path ("config.toml")
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, later overriding earlier: coded defaults, the optional
    /// config file, `SERVER_`-prefixed environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "Tokio-Hyper/1.0")?
            .set_default("site.name", "Nilay Biswas Portfolio")?
            .set_default("site.public_ip", "18.168.21.214")?
            .set_default("site.owner.name", "Nilay Biswas")?
            .set_default("site.owner.email", "nilaybiswas.datascience.2021@gmail.com")?
            .set_default("site.owner.phone", "+91 8391859206")?
            .set_default("site.owner.company", "Quantzent Pvt Ltd")?
            .set_default("site.owner.position", "Cloud Engineer")?
            .set_default(
                "site.github_url",
                "https://github.com/nilaycodetodecode/nilaypythonwebsite.git",
            )?
            .set_default("site.github_handle", "nilaycodetodecode")?
            .set_default(
                "site.linkedin_url",
                "https://www.linkedin.com/in/nilay-biswas-7aba07316",
            )?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
