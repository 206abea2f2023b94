//! Sojourner configuration and callsign resolution.
//!
//! Loaded from `~/.sojourner/config.toml`. The file is optional and a
//! missing one means defaults, but a file that exists and fails to parse
//! is an error, not a silent fallback.
//!
//! The ground-control callsign (the `location` a mission reports as) is
//! resolved through a chain rather than demanded on every invocation:
//!
//! 1. `--location <callsign>` — explicit per-command override
//! 2. `SOJOURNER_LOCATION` env var — process/session level
//! 3. `~/.sojourner/config.toml` — global default
//! 4. `"Houston"` — the callsign of last resort

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

use crate::cli::ReportFormat;

/// Fallback callsign when no other source provides one.
pub const DEFAULT_LOCATION: &str = "Houston";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Ground-control callsign used in reports and problem alerts.
    pub location: Option<String>,

    /// Report format used when `--format` is not provided.
    pub format: Option<ReportFormat>,
}

impl Config {
    /// Load config from `~/.sojourner/config.toml`, defaulting if absent.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.sojourner/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sojourner").join("config.toml"))
    }
}

/// Resolve the ground-control callsign from the tiered resolution chain.
///
/// Checks in order: explicit `--location` value, `SOJOURNER_LOCATION` env
/// var, the loaded config, then [`DEFAULT_LOCATION`]. Empty strings at any
/// tier are treated as unset.
pub fn resolve_location(explicit: Option<&str>, config: &Config) -> String {
    // 1. Explicit --location flag.
    if let Some(location) = explicit
        && !location.is_empty()
    {
        return location.to_string();
    }

    // 2. SOJOURNER_LOCATION environment variable.
    if let Ok(location) = env::var("SOJOURNER_LOCATION")
        && !location.is_empty()
    {
        return location;
    }

    // 3. ~/.sojourner/config.toml.
    if let Some(location) = config.location.as_deref()
        && !location.is_empty()
    {
        return location.to_string();
    }

    DEFAULT_LOCATION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_location_wins() {
        // An explicit callsign is returned immediately; no env or
        // filesystem access is needed to decide.
        let resolved = resolve_location(Some("Canberra"), &Config::default());
        assert_eq!(resolved, "Canberra");
    }

    #[test]
    fn config_location_beats_the_default() {
        let config = Config {
            location: Some("Jezero Base".to_string()),
            format: None,
        };
        assert_eq!(resolve_location(None, &config), "Jezero Base");
    }

    #[test]
    fn empty_sources_fall_through_to_houston() {
        let config = Config {
            location: Some(String::new()),
            format: None,
        };
        assert_eq!(resolve_location(None, &config), DEFAULT_LOCATION);
    }

    #[test]
    fn parses_a_minimal_config_file() {
        let config: Config =
            toml::from_str("location = \"Canberra\"\nformat = \"json\"").unwrap();
        assert_eq!(config.location.as_deref(), Some("Canberra"));
        assert_eq!(config.format, Some(ReportFormat::Json));
    }
}
