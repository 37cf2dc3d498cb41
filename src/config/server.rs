//! HTTP listener settings.

pub const DEFAULT_LISTEN_ADDR: &str = "localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address handed to `TcpListener::bind` (default: `localhost:8080`).
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}
