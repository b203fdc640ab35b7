//! Configuration for the portfolio server.
//!
//! Every field has a default, so an empty (or missing) YAML file is a valid
//! configuration. The binary layers CLI flags on top of whatever the file
//! provides.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Log filter used when `RUST_LOG` is not set (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Owner details served at `/api/profile`
    #[serde(default)]
    pub profile: Profile,
}

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            log_level: default_log_level(),
            profile: Profile::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file. Keys absent from the file keep
    /// their defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    ///
    /// Values are not validated here so CLI overrides can replace them first;
    /// call [`ServerConfig::validate`] once the final config is assembled.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        Ok(())
    }

    /// The bind address as a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address.parse().map_err(|_| {
            ConfigError::Invalid(format!("bind_address {:?} is not host:port", self.bind_address))
        })
    }
}

/// Public details about the site owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub description: String,
    pub contact: ContactDetails,
    pub stats: Stats,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub projects: String,
    pub clients: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Anderson".into(),
            title: "Full Stack Developer".into(),
            description: "Full Stack Developer specializing in Laravel, React, and modern web technologies. I build scalable applications that solve real-world problems.".into(),
            contact: ContactDetails::default(),
            stats: Stats::default(),
            social: SocialLinks::default(),
        }
    }
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: "john.anderson@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "San Francisco, CA".into(),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            projects: "50+".into(),
            clients: "25+".into(),
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            github: "#".into(),
            linkedin: "#".into(),
            twitter: "#".into(),
            email: "#".into(),
        }
    }
}
