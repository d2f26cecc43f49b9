//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hrchat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HrChatConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Email sent in every chat request so the server can scope its
    /// answers to this user.
    pub user_email: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_USER_EMAIL: &str = "user@example.com";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub user_email: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.hrchat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hrchat").join("config.toml"))
}

/// Load config from `~/.hrchat/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HrChatConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HrChatConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HrChatConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(HrChatConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: HrChatConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# hrchat Configuration
# All settings are optional; defaults are used for anything not set here.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# user_email = "you@company.com"     # Or set HRCHAT_USER_EMAIL env var

# [server]
# base_url = "http://localhost:5000" # Or set HRCHAT_BASE_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_server` and `cli_email` come from CLI flags (None = not specified).
pub fn resolve(
    config: &HrChatConfig,
    cli_server: Option<&str>,
    cli_email: Option<&str>,
) -> ResolvedConfig {
    // Server base URL: CLI → env → config → default
    let base_url = cli_server
        .map(|s| s.to_string())
        .or_else(|| std::env::var("HRCHAT_BASE_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // User email: CLI → env → config → default
    let user_email = cli_email
        .map(|s| s.to_string())
        .or_else(|| std::env::var("HRCHAT_USER_EMAIL").ok())
        .or_else(|| config.general.user_email.clone())
        .unwrap_or_else(|| DEFAULT_USER_EMAIL.to_string());

    ResolvedConfig {
        base_url,
        user_email,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = HrChatConfig::default();
        assert!(config.general.user_email.is_none());
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = HrChatConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.user_email, DEFAULT_USER_EMAIL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = HrChatConfig {
            general: GeneralConfig {
                user_email: Some("alex@company.com".to_string()),
            },
            server: ServerConfig {
                base_url: Some("http://hr.internal:5000".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://hr.internal:5000");
        assert_eq!(resolved.user_email, "alex@company.com");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = HrChatConfig {
            general: GeneralConfig {
                user_email: Some("config@company.com".to_string()),
            },
            server: ServerConfig {
                base_url: Some("http://config:5000".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://cli:5000"), Some("cli@company.com"));
        assert_eq!(resolved.base_url, "http://cli:5000");
        assert_eq!(resolved.user_email, "cli@company.com");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
user_email = "me@company.com"
"#;
        let config: HrChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.user_email.as_deref(), Some("me@company.com"));
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
user_email = "me@company.com"

[server]
base_url = "http://192.168.1.100:5000"
"#;
        let config: HrChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.user_email.as_deref(), Some("me@company.com"));
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.100:5000")
        );
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let toml_str = "[server\nbase_url = 42";
        let parsed: Result<HrChatConfig, _> = toml::from_str(toml_str);
        assert!(parsed.is_err());
    }
}
