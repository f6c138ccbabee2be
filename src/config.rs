use anyhow::{bail, Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_CORREIOS_API_URL: &str = "https://proxyapp.correios.com.br/v1/sro-rastro";
pub const DEFAULT_CORREIOS_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub path_prefix: String,
    pub correios_api_url: String,
    pub correios_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `LISTEN_ADDR`: Optional - Socket address to bind (default: "127.0.0.1:8000")
    /// - `OPENAPI_PREFIX`: Optional - Path prefix for the tracking routes (default: none)
    /// - `CORREIOS_API_URL`: Optional - Carrier tracking API base URL
    /// - `CORREIOS_TIMEOUT_SECS`: Optional - Carrier request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let path_prefix = normalize_prefix(&lookup("OPENAPI_PREFIX").unwrap_or_default());

        let correios_api_url = lookup("CORREIOS_API_URL")
            .unwrap_or_else(|| DEFAULT_CORREIOS_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !correios_api_url.starts_with("http://") && !correios_api_url.starts_with("https://") {
            bail!("CORREIOS_API_URL must be an http(s) URL");
        }

        let correios_timeout_secs = match lookup("CORREIOS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("CORREIOS_TIMEOUT_SECS must be a positive integer")?,
            None => DEFAULT_CORREIOS_TIMEOUT_SECS,
        };

        if correios_timeout_secs == 0 {
            bail!("CORREIOS_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            listen_addr,
            path_prefix,
            correios_api_url,
            correios_timeout_secs,
        })
    }
}

/// `"api/"` becomes `"/api"`; blank and `"/"` mean no prefix.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
