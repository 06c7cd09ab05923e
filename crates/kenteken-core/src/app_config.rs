use std::net::SocketAddr;

/// Runtime configuration, sourced from environment variables.
///
/// The registry base URL is optional: when unset, the client falls back to
/// the production open-data endpoint. Tests point it at a mock server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub rdw_base_url: Option<String>,
    pub rdw_timeout_secs: u64,
}
