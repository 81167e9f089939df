//
//  geoserver-client
//  api/gwc/diskquota.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GeoWebCache disk quota configuration.
//!
//! A singleton resource at `/diskquota.xml`; it can only be read and
//! replaced.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of the disk quota document.
pub const DISK_QUOTA_ROOT: &str = "gwcQuotaConfiguration";

/// Disk quota settings of the tile cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiskQuotaConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(rename = "cacheCleanUpFrequency", default)]
    pub cache_clean_up_frequency: u32,

    /// `SECONDS`, `MINUTES`, `HOURS` or `DAYS`.
    #[serde(rename = "cacheCleanUpUnits", default)]
    pub cache_clean_up_units: String,

    #[serde(rename = "maxConcurrentCleanUps", default)]
    pub max_concurrent_clean_ups: u32,

    /// `LRU` or `LFU`.
    #[serde(rename = "globalExpirationPolicyName", default)]
    pub global_expiration_policy_name: String,

    #[serde(rename = "globalQuota", default)]
    pub global_quota: Quota,

    #[serde(rename = "layerQuotas", default)]
    pub layer_quotas: LayerQuotas,
}

/// A storage amount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quota {
    #[serde(default)]
    pub value: u64,
    /// `B`, `KiB`, `MiB`, `GiB`, `TiB`.
    #[serde(default)]
    pub units: String,
}

impl Quota {
    /// A quota of `value` `units`, e.g. `Quota::new(512, "GiB")`.
    pub fn new(value: u64, units: impl Into<String>) -> Self {
        Self {
            value,
            units: units.into(),
        }
    }
}

/// Per-layer quota overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerQuotas {
    #[serde(rename = "LayerQuota", default)]
    pub quotas: Vec<LayerQuota>,
}

/// Quota and expiration policy of one cached layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerQuota {
    /// Qualified layer name, e.g. `topp:states`.
    pub layer: String,

    /// `LRU` or `LFU`.
    #[serde(rename = "expirationPolicyName", default)]
    pub expiration_policy_name: String,

    /// Space the layer may use.
    #[serde(default)]
    pub quota: Quota,
}

fn disk_quota() -> Endpoint {
    Endpoint::new().push("diskquota.xml")
}

impl GeoServerClient {
    /// Gets the disk quota configuration. Only a 200 answer succeeds.
    pub async fn get_disk_quota(&self) -> Result<DiskQuotaConfig> {
        self.fetch(&disk_quota(), StatusTable::READ_ONLY_OK).await
    }

    /// Replaces the disk quota configuration.
    pub async fn update_disk_quota(&self, config: &DiskQuotaConfig) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &disk_quota(),
            DISK_QUOTA_ROOT,
            config,
            StatusTable::UPDATE,
        )
        .await
    }
}
