use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const BIND_VAR: &str = "TRAVELMATE_BIND";
pub const BACKEND_URL_VAR: &str = "TRAVELMATE_BACKEND_URL";
pub const DIST_DIR_VAR: &str = "TRAVELMATE_DIST_DIR";
pub const LOG_DIR_VAR: &str = "TRAVELMATE_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Origin of the place search / itinerary backend
    pub backend_url: String,
    /// Output of `trunk build` for the frontend
    pub dist_dir: PathBuf,
    pub log_dir: PathBuf,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TRAVELMATE_BIND is not a socket address: {0:?}")]
    InvalidBind(String),
    #[error("TRAVELMATE_BACKEND_URL must be an http(s) URL, got {0:?}")]
    InvalidBackendUrl(String),
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            backend_url: "http://localhost:5000".to_owned(),
            dist_dir: PathBuf::from("frontend/dist"),
            log_dir: PathBuf::from("server/log"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Unset or empty variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(bind) = lookup(BIND_VAR) {
            config.bind = bind.trim().parse().map_err(|_| ConfigError::InvalidBind(bind))?;
        }

        if let Some(url) = lookup(BACKEND_URL_VAR) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBackendUrl(url.to_owned()));
            }
            config.backend_url = url.trim_end_matches('/').to_owned();
        }

        if let Some(dir) = lookup(DIST_DIR_VAR) {
            config.dist_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup(LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), Ok(ServerConfig::default()));
        assert_eq!(ServerConfig::from_lookup(lookup(&[(BIND_VAR, "  ")])), Ok(ServerConfig::default()));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_VAR, "127.0.0.1:3000"),
            (BACKEND_URL_VAR, "https://planner.example.com/"),
            (DIST_DIR_VAR, "/srv/travelmate"),
            (LOG_DIR_VAR, "/var/log/travelmate"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            ServerConfig {
                bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
                backend_url: "https://planner.example.com".to_owned(),
                dist_dir: PathBuf::from("/srv/travelmate"),
                log_dir: PathBuf::from("/var/log/travelmate"),
            }
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[(BIND_VAR, "localhost")])),
            Err(ConfigError::InvalidBind("localhost".to_owned()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[(BACKEND_URL_VAR, "ftp://backend")])),
            Err(ConfigError::InvalidBackendUrl("ftp://backend".to_owned()))
        );
    }
}
