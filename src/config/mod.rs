//! Service configuration: fixed defaults plus store credentials from the environment.

pub mod database;
pub mod server;

pub use database::*;
pub use server::*;

/// Everything the binary needs to start the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl CatalogConfig {
    /// Reads credentials from the process environment; everything else keeps its default.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            server: ServerConfig::default(),
        }
    }
}
