//! Portal configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_GATEWAY_REFRESH_SECS: u64 = 30;
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the gateway admin API, without trailing slash.
    pub admin_url: String,
    pub refresh_secs: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Public scheme + host used to build service links. Empty means relative.
    pub public_origin: String,
    pub locale: String,
    /// `None` disables availability filtering.
    pub gateway: Option<GatewayConfig>,
    pub icons_dir: PathBuf,
    /// Base URL for `/pkg` and `/icons` assets when they are served from a CDN.
    pub cdn_url: Option<String>,
}

impl PortalConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_ORIGIN`: e.g. `https://aether.example.org`; default relative links
    /// - `PORTAL_LOCALE`: default `en`
    /// - `GATEWAY_ADMIN_URL`: gateway admin API; absent disables filtering
    /// - `GATEWAY_REFRESH_SECS`: default 30
    /// - `GATEWAY_TIMEOUT_SECS`: default 10
    /// - `ICONS_DIR`: directory served at `/icons`
    /// - `CDN_URL`: base URL for static assets; default the portal itself
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse
    /// or a refresh interval of zero is requested.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let public_origin = env_string("PUBLIC_ORIGIN")
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();
        let locale = env_string("PORTAL_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let gateway = match env_string("GATEWAY_ADMIN_URL") {
            Some(url) => {
                let refresh_secs = env_parse("GATEWAY_REFRESH_SECS", DEFAULT_GATEWAY_REFRESH_SECS)?;
                if refresh_secs == 0 {
                    return Err(ConfigError::Invalid { var: "GATEWAY_REFRESH_SECS", value: "0".into() });
                }
                Some(GatewayConfig {
                    admin_url: url.trim_end_matches('/').to_string(),
                    refresh_secs,
                    timeout_secs: env_parse("GATEWAY_TIMEOUT_SECS", DEFAULT_GATEWAY_TIMEOUT_SECS)?,
                })
            }
            None => None,
        };

        let icons_dir = env_string("ICONS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/public/icons"));

        let cdn_url = env_string("CDN_URL").map(|url| url.trim_end_matches('/').to_string());

        Ok(Self { port, public_origin, locale, gateway, icons_dir, cdn_url })
    }
}

/// Non-empty, trimmed value of `key`.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env_string(key) {
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid { var: key, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
