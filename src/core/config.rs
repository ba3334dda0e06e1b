//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tripane/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::fs::preview::DEFAULT_SNIFF_BYTES;
use crate::fs::snapshot::DEFAULT_ENTRY_CAP;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TripaneConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Start with dotfiles visible.
    pub show_hidden: Option<bool>,
    /// Max entries held per directory snapshot before truncation.
    pub entry_cap: Option<usize>,
    /// Leading bytes inspected by the text/binary preview sniff.
    pub sniff_bytes: Option<usize>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub show_hidden: bool,
    pub entry_cap: usize,
    pub sniff_bytes: usize,
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

/// Returns the directory holding tripane's config and log files.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tripane"))
}

/// Returns the path to `~/.tripane/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.tripane/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TripaneConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TripaneConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TripaneConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TripaneConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TripaneConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Tripane Configuration
# All settings are optional; defaults are used for anything not set here.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# show_hidden = false      # Start with dotfiles visible (TRIPANE_SHOW_HIDDEN)
# entry_cap = 4096         # Snapshot truncation limit (TRIPANE_ENTRY_CAP)
# sniff_bytes = 512        # Bytes inspected for the binary-file heuristic
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
/// `cli_hidden` is the `--hidden` flag (false = not specified).
pub fn resolve(config: &TripaneConfig, cli_hidden: bool) -> ResolvedConfig {
    // Hidden flag: CLI → env → config → default
    let show_hidden = cli_hidden
        || std::env::var("TRIPANE_SHOW_HIDDEN")
            .ok()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .or(config.general.show_hidden)
            .unwrap_or(false);

    // Entry cap: env → config → default
    let entry_cap = std::env::var("TRIPANE_ENTRY_CAP")
        .ok()
        .and_then(|v| v.parse().ok())
        .or(config.general.entry_cap)
        .unwrap_or(DEFAULT_ENTRY_CAP)
        .max(1);

    let sniff_bytes = config
        .general
        .sniff_bytes
        .unwrap_or(DEFAULT_SNIFF_BYTES)
        .max(1);

    ResolvedConfig {
        show_hidden,
        entry_cap,
        sniff_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TripaneConfig::default();
        assert!(config.general.show_hidden.is_none());
        assert!(config.general.entry_cap.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = TripaneConfig::default();
        let resolved = resolve(&config, false);
        assert!(!resolved.show_hidden);
        assert_eq!(resolved.entry_cap, DEFAULT_ENTRY_CAP);
        assert_eq!(resolved.sniff_bytes, DEFAULT_SNIFF_BYTES);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TripaneConfig {
            general: GeneralConfig {
                show_hidden: Some(true),
                entry_cap: Some(128),
                sniff_bytes: Some(1024),
            },
        };
        let resolved = resolve(&config, false);
        assert!(resolved.show_hidden);
        assert_eq!(resolved.entry_cap, 128);
        assert_eq!(resolved.sniff_bytes, 1024);
    }

    #[test]
    fn test_resolve_cli_hidden_wins() {
        let config = TripaneConfig {
            general: GeneralConfig {
                show_hidden: Some(false),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, true);
        assert!(resolved.show_hidden);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
entry_cap = 512
"#;
        let config: TripaneConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.entry_cap, Some(512));
        assert!(config.general.show_hidden.is_none());
        assert!(config.general.sniff_bytes.is_none());
    }

    #[test]
    fn test_zero_caps_are_clamped() {
        let config = TripaneConfig {
            general: GeneralConfig {
                entry_cap: Some(0),
                sniff_bytes: Some(0),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, false);
        assert_eq!(resolved.entry_cap, 1);
        assert_eq!(resolved.sniff_bytes, 1);
    }
}
