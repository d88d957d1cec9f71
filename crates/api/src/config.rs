//! API configuration (process environment).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Secret used when `JWT_SECRET` is not set. Development only.
pub const DEFAULT_JWT_SECRET: &str = "this_is_my_secret";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// API server configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Shared HS256 secret for bearer tokens.
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
}

impl core::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("jwt_secret", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables (`JWT_SECRET`, `HOST`, `PORT`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set; using insecure dev default");
                defaults.jwt_secret
            }
        };

        let host = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value: raw,
            })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            jwt_secret,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(cfg.jwt_secret, "s3cret");
        assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn debug_output_hides_secret() {
        let cfg = ApiConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert!(!format!("{cfg:?}").contains("s3cret"));
    }
}
