//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pad/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub banner: Option<String>,
    pub read_timeout_ds: Option<u8>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Read window for the bytes following an escape, in tenths of a second.
pub const DEFAULT_READ_TIMEOUT_DS: u8 = 1;

pub fn default_banner() -> String {
    format!("Pad editor version {}", env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub banner: String,
    pub read_timeout_ds: u8,
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

/// Returns the path to `~/.pad/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pad").join("config.toml"))
}

/// Load config from `~/.pad/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PadConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PadConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PadConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PadConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<PadConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PadConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Pad Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# banner = "Pad editor version 0.1.0"   # ASCII only; or set PAD_BANNER
# read_timeout_ds = 1                   # Escape sequence read window, 1..=255 tenths of a second
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
/// `env_banner` is `PAD_BANNER`, read by the caller, and `cli_banner` is from
/// the `--banner` flag (None = not specified).
pub fn resolve(
    config: &PadConfig,
    env_banner: Option<String>,
    cli_banner: Option<&str>,
) -> ResolvedConfig {
    // Banner: CLI → env → config → default
    let banner = cli_banner
        .map(|s| s.to_string())
        .or(env_banner)
        .or_else(|| config.general.banner.clone());
    let banner = match banner {
        Some(text) if text.is_ascii() => text,
        Some(text) => {
            warn!("Ignoring non-ASCII banner {:?}, using default", text);
            default_banner()
        }
        None => default_banner(),
    };

    let read_timeout_ds = match config.general.read_timeout_ds {
        Some(0) => {
            warn!("read_timeout_ds = 0 would make reads spin, using 1");
            1
        }
        Some(ds) => ds,
        None => DEFAULT_READ_TIMEOUT_DS,
    };

    ResolvedConfig {
        banner,
        read_timeout_ds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PadConfig::default();
        assert!(config.general.banner.is_none());
        assert!(config.general.read_timeout_ds.is_none());
    }

    #[test]
    fn test_default_banner_is_24_bytes() {
        assert_eq!(default_banner(), "Pad editor version 0.1.0");
        assert_eq!(default_banner().len(), 24);
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&PadConfig::default(), None, None);
        assert_eq!(resolved.read_timeout_ds, DEFAULT_READ_TIMEOUT_DS);
        assert!(resolved.banner.starts_with("Pad editor"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PadConfig {
            general: GeneralConfig {
                banner: Some("Hello".to_string()),
                read_timeout_ds: Some(5),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.banner, "Hello");
        assert_eq!(resolved.read_timeout_ds, 5);
    }

    #[test]
    fn test_resolve_cli_banner_wins() {
        let config = PadConfig {
            general: GeneralConfig {
                banner: Some("From file".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("From env".to_string()), Some("From CLI"));
        assert_eq!(resolved.banner, "From CLI");
    }

    #[test]
    fn test_resolve_env_banner_beats_config() {
        let config = PadConfig {
            general: GeneralConfig {
                banner: Some("From file".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("From env".to_string()), None);
        assert_eq!(resolved.banner, "From env");
    }

    #[test]
    fn test_non_ascii_banner_falls_back() {
        let resolved = resolve(&PadConfig::default(), None, Some("pâd"));
        assert_eq!(resolved.banner, default_banner());
    }

    #[test]
    fn test_zero_timeout_is_raised_to_one() {
        let config = PadConfig {
            general: GeneralConfig {
                read_timeout_ds: Some(0),
                ..Default::default()
            },
        };
        assert_eq!(resolve(&config, None, None).read_timeout_ds, 1);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
read_timeout_ds = 3
"#;
        let config: PadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.read_timeout_ds, Some(3));
        assert!(config.general.banner.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: PadConfig = toml::from_str("").unwrap();
        assert!(config.general.banner.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("pad-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general]\nread_timeout_ds = \"slow\"\n").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let result = load_config_from(Path::new("/nonexistent/pad/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
