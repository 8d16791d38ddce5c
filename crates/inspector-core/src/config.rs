//! Configuration for the inspector and the services built on it.
//!
//! Configuration is read from TOML. Every field has a default, so an empty
//! file (or no file at all) yields a working setup.
//!
//! Resolution order for the config file:
//! 1. An explicit path (must exist)
//! 2. `$INSPECTOR_CONFIG` (must exist when set)
//! 3. `<config_dir>/deep-inspector/config.toml`, if present
//!
//! After loading, [`InspectorConfig::apply_env`] lets `PORT` and
//! `INSPECTOR_HOST` override the listen address.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "deep-inspector";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "INSPECTOR_CONFIG";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// HTTP listen settings.
    pub server: ServerConfig,
    /// Page fetch settings.
    pub http: HttpConfig,
    /// Name resolution settings.
    pub dns: DnsConfig,
    /// WHOIS client settings.
    pub whois: WhoisConfig,
}

/// HTTP listen settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Page fetch settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` sent to inspected sites.
    pub user_agent: String,
    /// Redirects followed before giving up.
    pub max_redirects: usize,
    /// Body bytes kept for fingerprinting.
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: format!("{PROJECT_NAME}/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 5,
            max_body_bytes: 2_000_000,
        }
    }
}

impl HttpConfig {
    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Name resolution settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsConfig {
    /// Lookup timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self { timeout_secs: 5 }
    }
}

impl DnsConfig {
    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// WHOIS client settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisConfig {
    /// Per-query timeout in seconds (connect, write and read).
    pub timeout_secs: u64,
    /// Follow a registrar referral found in the registry response.
    pub follow_referral: bool,
    /// Server asked which server is authoritative for a TLD.
    pub iana_server: String,
    /// Fixed TLD → server mappings, consulted before IANA.
    pub servers: HashMap<String, String>,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            follow_referral: true,
            iana_server: "whois.iana.org".to_string(),
            servers: HashMap::new(),
        }
    }
}

impl WhoisConfig {
    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl InspectorConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve which config file to read, if any.
    ///
    /// An explicit path is always returned. Otherwise `$INSPECTOR_CONFIG`
    /// wins over the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load configuration.
    ///
    /// A missing file named explicitly or through `$INSPECTOR_CONFIG` is an
    /// error. A missing default file means defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_ENV_VAR).ok();
        Self::load_with(explicit, from_env.as_deref())
    }

    fn load_with(explicit: Option<&str>, from_env: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit.or(from_env.filter(|p| !p.is_empty())) {
            let path = Path::new(path);
            if !path.exists() {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        let Some(path) = Self::default_config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Read and parse one TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply `PORT` and `INSPECTOR_HOST` overrides from the environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(
            std::env::var("INSPECTOR_HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host.filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = port.filter(|p| !p.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("PORT must be a port number, got '{port}'")))?;
        }
        Ok(())
    }

    /// Reject settings that would make every probe fail.
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(Error::config("http.timeout_secs must be greater than 0"));
        }
        if self.dns.timeout_secs == 0 {
            return Err(Error::config("dns.timeout_secs must be greater than 0"));
        }
        if self.whois.timeout_secs == 0 {
            return Err(Error::config("whois.timeout_secs must be greater than 0"));
        }
        if self.whois.iana_server.trim().is_empty() {
            return Err(Error::config("whois.iana_server must not be empty"));
        }
        Ok(())
    }

    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
