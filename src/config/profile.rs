//
//  geoserver-client
//  config/profile.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connection profiles and environment overrides.

use serde::{Deserialize, Serialize};

/// Overrides the catalog REST URL.
pub const ENV_URL: &str = "GEOSERVER_URL";
/// Overrides the GeoWebCache REST URL.
pub const ENV_GWC_URL: &str = "GEOSERVER_GWC_URL";
/// Overrides the username.
pub const ENV_USERNAME: &str = "GEOSERVER_USERNAME";
/// Overrides the password.
pub const ENV_PASSWORD: &str = "GEOSERVER_PASSWORD";

/// Connection settings for one GeoServer instance.
///
/// # Fields
///
/// * `url` - Catalog REST root, e.g. `http://localhost:8080/geoserver/rest`
/// * `gwc_url` - GeoWebCache REST root; derived from `url` when unset
/// * `username` / `password` - Basic credentials
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConnectionProfile {
    /// Catalog REST root.
    #[serde(default)]
    pub url: String,

    /// GeoWebCache REST root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gwc_url: Option<String>,

    /// Basic auth username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Basic auth password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ConnectionProfile {
    /// Creates a profile for `url` with no credentials.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Overlays the `GEOSERVER_*` environment variables onto this profile.
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var(ENV_URL) {
            self.url = url;
        }
        if let Some(gwc_url) = var(ENV_GWC_URL) {
            self.gwc_url = Some(gwc_url);
        }
        if let Some(username) = var(ENV_USERNAME) {
            self.username = Some(username);
        }
        if let Some(password) = var(ENV_PASSWORD) {
            self.password = Some(password);
        }
        self
    }

    /// Returns the GeoWebCache REST root.
    ///
    /// `gwc_url` wins when set. Otherwise a catalog URL ending in `/rest`
    /// maps to the sibling `/gwc/rest`; any other URL yields `None`.
    pub fn gwc_base_url(&self) -> Option<String> {
        if let Some(url) = &self.gwc_url {
            return Some(url.clone());
        }
        let trimmed = self.url.trim_end_matches('/');
        trimmed
            .strip_suffix("/rest")
            .map(|root| format!("{}/gwc/rest", root))
    }
}
