//! Connection settings for the MySQL catalog database.

use sqlx::mysql::MySqlConnectOptions;
use std::fmt;

/// Environment variable holding the database user.
pub const DB_USER_ENV: &str = "DBUSER";
/// Environment variable holding the database password.
pub const DB_PASS_ENV: &str = "DBPASS";

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_NAME: &str = "library";

/// Where the `book` table lives and how to log in. Only the credentials are
/// read from the environment; the rest are fixed defaults.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::with_credentials(String::new(), String::new())
    }
}

impl DatabaseConfig {
    pub fn with_credentials(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            database: DEFAULT_DB_NAME.to_string(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Unset variables become empty strings; the server rejects them at connect time.
    pub fn from_env() -> Self {
        Self::with_credentials(
            std::env::var(DB_USER_ENV).unwrap_or_default(),
            std::env::var(DB_PASS_ENV).unwrap_or_default(),
        )
    }

    /// `host:port`, as used in log lines.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
