// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::ColumnAliases;

/// Tunables for the derived views. The two zoom levels are a fixed policy
/// (whole world vs. one country), not something computed from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub zoom_global: f64,
    pub zoom_country: f64,
    /// Camera tilt in degrees for the map panel
    pub pitch: f64,
    /// Passengers per unit of bubble diameter
    pub bubble_divisor: f64,
    pub top_airports: usize,
    pub top_countries: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_global: 2.0,
            zoom_country: 5.0,
            pitch: 40.0,
            bubble_divisor: 1_000_000.0,
            top_airports: 5,
            top_countries: 10,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.bubble_divisor.is_finite() || self.bubble_divisor <= 0.0 {
            bail!(
                "bubble_divisor must be a positive number, got {}",
                self.bubble_divisor
            );
        }
        for (name, value) in [
            ("zoom_global", self.zoom_global),
            ("zoom_country", self.zoom_country),
            ("pitch", self.pitch),
        ] {
            if !value.is_finite() {
                bail!("{name} must be finite, got {value}");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub view: ViewConfig,
    pub columns: ColumnAliases,
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Per-user config location, falling back to the working directory.
    pub fn default_location() -> Self {
        let config_path = ProjectDirs::from("org", "airstats", "airstats")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("airstats.json"));
        Self { config_path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            log::debug!(
                "No config file, using defaults — config_path={}",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read {}", self.config_path.display()))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.config_path.display()))?;
        config
            .view
            .validate()
            .with_context(|| format!("Invalid view settings in {}", self.config_path.display()))?;
        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, content)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
        log::info!("Config written — config_path={}", self.config_path.display());
        Ok(())
    }
}
