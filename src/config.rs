// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use yearfrac::EphemerisConfig;

use crate::cli::Cli;

/// Top-level configuration file.
///
/// ```toml
/// [observer]
/// latitude = 38.478752
/// longitude = -107.877739
///
/// [ephemeris]
/// model = "analytic"   # or "meeus"
/// step_days = 30.0
/// epsilon_seconds = 0.001
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub observer: ObserverToml,

    #[serde(default)]
    pub ephemeris: EphemerisConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl Default for ObserverToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

fn default_latitude() -> f64 {
    38.478752
}
fn default_longitude() -> f64 {
    -107.877739
}

impl AppConfig {
    /// Read the file named on the command line, if any, then apply the
    /// command-line overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(latitude) = cli.latitude {
            config.observer.latitude = latitude;
        }
        if let Some(longitude) = cli.longitude {
            config.observer.longitude = longitude;
        }
        if let Some(model) = cli.model {
            config.ephemeris.model = model.into();
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use yearfrac::EphemerisModel;

    #[test]
    fn empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.observer.latitude, 38.478752);
        assert_eq!(config.observer.longitude, -107.877739);
        assert_eq!(config.ephemeris, EphemerisConfig::default());
    }

    #[test]
    fn file_sections_are_read() {
        let config: AppConfig = toml::from_str(
            r#"
            [observer]
            longitude = 139.69

            [ephemeris]
            model = "meeus"
            "#,
        )
        .unwrap();
        assert_eq!(config.observer.longitude, 139.69);
        assert_eq!(config.observer.latitude, 38.478752);
        assert_eq!(config.ephemeris.model, EphemerisModel::Meeus);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<AppConfig>("[observer]\nelevation = 2000.0").is_err());
    }

    #[test]
    fn command_line_overrides_defaults() {
        let cli = Cli::try_parse_from(["yearfrac", "--longitude", "2.35", "--model", "meeus"])
            .unwrap();
        let config = AppConfig::resolve(&cli).unwrap();
        assert_eq!(config.observer.longitude, 2.35);
        assert_eq!(config.observer.latitude, 38.478752);
        assert_eq!(config.ephemeris.model, EphemerisModel::Meeus);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = AppConfig::from_file(Path::new("/nonexistent/yearfrac.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
