//! Startup configuration from environment variables.
//!
//! - `PORT`: listen port, default 3000
//! - `SITE_DIR`: static asset root, default `public/` next to the manifest
//! - `SITE_INDEX`: entry document inside `SITE_DIR`, default `index.html`
//!
//! Parsing goes through a lookup function so tests can feed variables
//! without touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_INDEX: &str = "index.html";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },
    #[error("SITE_INDEX must be a file name, got {value:?}")]
    InvalidIndex { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub index: String,
}

impl SiteConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `SITE_INDEX` is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `SITE_INDEX` is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => parse_port(&value)?,
            None => DEFAULT_PORT,
        };
        let site_dir = lookup("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);
        let index = match lookup("SITE_INDEX") {
            Some(value) => parse_index(value)?,
            None => DEFAULT_INDEX.to_string(),
        };
        Ok(Self { port, site_dir, index })
    }

    /// Address to bind: every interface on the configured port.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.site_dir.join(&self.index)
    }
}

fn default_site_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidPort { value: value.to_string() })
}

fn parse_index(value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
        return Err(ConfigError::InvalidIndex { value });
    }
    Ok(trimmed.to_string())
}
