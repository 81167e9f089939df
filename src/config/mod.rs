//
//  geoserver-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Named connection profiles for GeoServer instances, stored as TOML in the
//! platform configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/geoserver/config.toml`
//! - **macOS**: `~/Library/Application Support/geoserver/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\geoserver\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! default_profile = "local"
//!
//! [profiles.local]
//! url = "http://localhost:8080/geoserver/rest"
//! username = "admin"
//! password = "geoserver"
//!
//! [profiles.prod]
//! url = "https://maps.example.com/geoserver/rest"
//! gwc_url = "https://tiles.example.com/geoserver/gwc/rest"
//! username = "ops"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::config::Config;
//!
//! let config = Config::load()?;
//! if let Some(profile) = config.active_profile() {
//!     let profile = profile.clone().apply_env();
//!     let client = GeoServerClient::from_profile(&profile)?;
//!     let gwc = GeoServerClient::gwc_from_profile(&profile)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;
mod profile;

pub use file::*;
pub use profile::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application name used for the platform directories.
const APP_NAME: &str = "geoserver";

/// Top-level configuration.
///
/// # Fields
///
/// * `default_profile` - Profile used when none is named explicitly
/// * `profiles` - Connection profiles keyed by name
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Name of the profile [`Config::active_profile`] returns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,

    /// Connection profiles keyed by name.
    #[serde(default)]
    pub profiles: HashMap<String, ConnectionProfile>,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Fails if the config directory cannot be determined, the file cannot
    /// be read, or its TOML is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`; a missing file yields an empty one.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path of the default configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Looks up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&ConnectionProfile> {
        self.profiles.get(name)
    }

    /// Returns the default profile, or the only profile when exactly one
    /// exists.
    pub fn active_profile(&self) -> Option<&ConnectionProfile> {
        match &self.default_profile {
            Some(name) => self.profiles.get(name),
            None if self.profiles.len() == 1 => self.profiles.values().next(),
            None => None,
        }
    }

    /// Inserts or replaces a profile.
    ///
    /// The first profile added becomes the default.
    pub fn set_profile(&mut self, name: impl Into<String>, profile: ConnectionProfile) {
        let name = name.into();
        if self.default_profile.is_none() {
            self.default_profile = Some(name.clone());
        }
        self.profiles.insert(name, profile);
    }

    /// Removes a profile, clearing the default if it pointed at it.
    pub fn remove_profile(&mut self, name: &str) -> Option<ConnectionProfile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }
}
