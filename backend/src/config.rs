//! Service configuration loaded via OrthoConfig.
//!
//! Values are merged from CLI arguments, environment variables, and
//! configuration files, with hard-coded defaults as the final fallback.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "items.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Startup settings for the item service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
pub struct ServiceSettings {
    /// Path of the SQLite database file.
    pub database_url: Option<String>,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
}

impl ServiceSettings {
    /// Return the configured database URL, falling back to the default.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }
}
