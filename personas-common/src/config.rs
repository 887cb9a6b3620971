//! Configuration types and loading for the personas daemon

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default configuration file location
pub const DEFAULT_CONFIG_FILE: &str = "/etc/personasd/personasd.conf";

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TCP port
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the personas daemon
///
/// This struct holds all configuration options that can be set via:
/// - Configuration file (YAML)
/// - Command-line arguments
/// - Defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to a JSON file with personas loaded into the store at startup
    ///
    /// The file holds an array of persona objects in the create-request
    /// shape (no ids). If None, the store starts empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Returns `Ok(Config)` if the file exists and is valid YAML.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead(path.into(), e))?;

        serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::YamlParse(path.into(), e.to_string()))
    }

    /// Load configuration from a file if it exists, otherwise return defaults
    ///
    /// This is useful for the default config file location where a missing file is not an error.
    pub fn from_file_or_default(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "host must not be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidValue(
                "port must be between 1 and 65535".to_string(),
            ));
        }

        Ok(())
    }

    /// Merge another Config into this one, overriding fields that are explicitly set
    ///
    /// This is used to implement the precedence: CLI > file > defaults
    pub fn merge(&mut self, other: Config) {
        if other.host != DEFAULT_HOST {
            self.host = other.host;
        }

        if other.port != DEFAULT_PORT {
            self.port = other.port;
        }

        if other.seed.is_some() {
            self.seed = other.seed;
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse YAML config file {0}: {1}")]
    YamlParse(PathBuf, String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let config = Config {
            host: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_port() {
        let config = Config {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_deserialization() {
        let yaml = r#"
host: 0.0.0.0
port: 8080
seed: /etc/personasd/seed.json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed, Some(PathBuf::from("/etc/personasd/seed.json")));
    }

    #[test]
    fn test_yaml_deserialization_partial() {
        let yaml = r#"
port: 8080
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.host, "127.0.0.1"); // default
        assert_eq!(config.port, 8080); // overridden
    }

    #[test]
    fn test_yaml_unknown_keys_rejected() {
        let yaml = r#"
port: 8080
bind-backlog: 128
"#;
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed: None,
        };
        let override_config = Config {
            port: 9000,
            ..Default::default()
        };

        base.merge(override_config);

        assert_eq!(base.port, 9000);
        assert_eq!(base.host, "0.0.0.0"); // unchanged
    }
}
