// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.momentumlabs", "Momentum", "momentum"));

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Session settings: where the API lives and who is logged in. This is
/// the only state kept on disk; every tracker entity is re-fetched from
/// the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base: String,
    pub access_token: Option<String>,
    pub username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            access_token: None,
            username: None,
        }
    }
}

impl Config {
    pub fn logged_in(&self) -> bool {
        self.access_token.is_some()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("config.json"))
}

pub fn read_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse config at {}", path.display()))
}

pub fn write_to(path: &Path, cfg: &Config) -> Result<()> {
    let raw = serde_json::to_string_pretty(cfg)?;
    fs::write(path, raw).with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}

pub fn load() -> Result<Config> {
    read_from(&config_path()?)
}

pub fn save(cfg: &Config) -> Result<()> {
    write_to(&config_path()?, cfg)
}
