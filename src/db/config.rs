//! Database connection settings.

use std::env;

/// Which sqlx driver a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

/// Connection parameters.
///
/// Each field falls back to a default when its environment variable is
/// unset. `DATABASE_URL` wins over the individual fields when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub url: Option<String>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "mcp_docs".to_string(),
            url: None,
        }
    }
}

impl DbConfig {
    /// Read `DB_HOST`, `DB_PORT`, `DB_USERNAME`, `DB_PASSWORD`, `DB_NAME`
    /// and `DATABASE_URL`.
    ///
    /// An unparsable `DB_PORT` falls back to the default port.
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("DB_HOST").unwrap_or(defaults.host),
            port: env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            username: env::var("DB_USERNAME").unwrap_or(defaults.username),
            password: env::var("DB_PASSWORD").unwrap_or(defaults.password),
            database: env::var("DB_NAME").unwrap_or(defaults.database),
            url: env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
        }
    }

    /// Override the connection with a full URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn backend(&self) -> Backend {
        match &self.url {
            Some(url) if url.starts_with("sqlite:") => Backend::Sqlite,
            _ => Backend::Postgres,
        }
    }

    /// A printable description of the target with the password masked.
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(url) if self.backend() == Backend::Sqlite => url.clone(),
            Some(_) => "DATABASE_URL".to_string(),
            None => format!(
                "postgres://{}:***@{}:{}/{}",
                self.username, self.host, self.port, self.database
            ),
        }
    }
}
