// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use crate::state::ResetPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Used as the page title
    #[serde(default = "default_name")]
    pub name: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Form behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    /// "keep_snapshot" (default) or "clear_snapshot"
    #[serde(default)]
    pub reset_policy: ResetPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing-subscriber filter directive, used when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
}

// Default values
fn default_name() -> String {
    "Register".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    /// Apply `SIGNUP_HOST` / `SIGNUP_PORT` overrides read through `lookup`.
    ///
    /// An unparsable port is ignored with a warning.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("SIGNUP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SIGNUP_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!("Ignoring SIGNUP_PORT={:?}: {}", port, e),
            }
        }
        self
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.project.name, "Register");
        assert_eq!(config.form.reset_policy, ResetPolicy::KeepSnapshot);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_custom_sections() {
        let toml = r#"
            [server]
            port = 8080

            [form]
            reset_policy = "clear_snapshot"

            [log]
            level = "signup=debug"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.form.reset_policy, ResetPolicy::ClearSnapshot);
        assert_eq!(config.log.level, "signup=debug");
    }

    #[test]
    fn test_unknown_reset_policy_is_an_error() {
        let toml = r#"
            [form]
            reset_policy = "sometimes"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("does/not/exist/signup.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("SIGNUP_HOST", "0.0.0.0"), ("SIGNUP_PORT", "9000")]);
        let config = Config::default().with_env_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");

        let config = Config::default()
            .with_env_overrides(|key| (key == "SIGNUP_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 3000);
    }
}
