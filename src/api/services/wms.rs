//
//  geoserver-client
//  api/services/wms.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! WMS service settings.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! let mut settings = client.get_wms_settings(None).await?;
//! settings.title = Some("Regional basemaps".to_string());
//! settings.max_rendering_time = 60;
//! client.update_wms_settings(None, &settings).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{EntryMap, GeoServerError, Keywords, NamedRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a WMS settings document.
pub const WMS_ROOT: &str = "wms";

/// Service name GeoServer expects in every WMS settings update.
pub const WMS_SERVICE_NAME: &str = "WMS";

/// WMS service configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WmsSettings {
    /// Always `WMS`; set by [`GeoServerClient::update_wms_settings`].
    #[serde(default)]
    pub name: String,

    /// A disabled service answers every request with an exception.
    #[serde(default)]
    pub enabled: bool,

    /// Title advertised in GetCapabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Maintainer contact URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,

    /// Service abstract. GeoServer spells the element `abstrct`.
    #[serde(rename = "abstrct", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Access constraints advertised in GetCapabilities.
    #[serde(rename = "accessConstraints", default, skip_serializing_if = "Option::is_none")]
    pub access_constraints: Option<String>,

    /// Service home page.
    #[serde(rename = "onlineResource", default, skip_serializing_if = "Option::is_none")]
    pub online_resource: Option<String>,

    /// Pretty-print XML responses.
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub watermark: Watermark,

    /// `Nearest`, `Bilinear` or `Bicubic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<String>,

    /// Enforce strict OGC CITE compliance.
    #[serde(rename = "citeCompliant", default)]
    pub cite_compliant: bool,

    /// Upper bound of the rendering buffer, in pixels.
    #[serde(rename = "maxBuffer", default)]
    pub max_buffer: i32,

    /// Reject SLD and SLD_BODY request parameters.
    #[serde(rename = "dynamicStylingDisabled", default)]
    pub dynamic_styling_disabled: bool,

    /// Free-form service metadata such as `kmlSuperoverlayMode`.
    #[serde(default, skip_serializing_if = "EntryMap::is_empty")]
    pub metadata: EntryMap,

    /// Keywords advertised in GetCapabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,

    /// Restrict GetFeatureInfo output formats to an allow-list.
    #[serde(rename = "getFeatureInfoMimeTypeCheckingEnabled", default)]
    pub get_feature_info_mime_type_checking_enabled: bool,

    /// Maximum memory per GetMap request, in kilobytes.
    #[serde(rename = "maxRequestMemory", default)]
    pub max_request_memory: i32,

    /// Fees advertised in GetCapabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,

    /// Rendering errors tolerated before a request fails; 0 means no limit.
    #[serde(rename = "maxRenderingErrors", default)]
    pub max_rendering_errors: i32,

    /// Maximum rendering time per request, in seconds.
    #[serde(rename = "maxRenderingTime", default)]
    pub max_rendering_time: i32,

    /// Workspace of a per-workspace override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<NamedRef>,

    /// Supported WMS protocol versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<ServiceVersions>,

    /// Base URL of the OGC schemas referenced by responses.
    #[serde(rename = "schemaBaseURL", default, skip_serializing_if = "Option::is_none")]
    pub schema_base_url: Option<String>,

    /// List a bounding box per supported CRS in GetCapabilities.
    #[serde(rename = "bboxForEachCRS", default)]
    pub bbox_for_each_crs: bool,

    /// Restrict GetMap output formats to an allow-list.
    #[serde(rename = "getMapMimeTypeCheckingEnabled", default)]
    pub get_map_mime_type_checking_enabled: bool,

    /// Return GetFeatureInfo geometries in their native CRS.
    #[serde(rename = "featuresReprojectionDisabled", default)]
    pub features_reprojection_disabled: bool,

    /// Maximum number of time or elevation values per request.
    #[serde(rename = "maxRequestedDimensionValues", default)]
    pub max_requested_dimension_values: i32,

    /// Remote SLD cache.
    #[serde(rename = "cacheConfiguration", default)]
    pub cache_configuration: CacheConfiguration,

    /// Total time allowed for fetching remote styles, in milliseconds.
    #[serde(rename = "remoteStyleMaxRequestTime", default)]
    pub remote_style_max_request_time: i32,

    /// Timeout of a single remote style request, in milliseconds.
    #[serde(rename = "remoteStyleTimeout", default)]
    pub remote_style_timeout: i32,

    /// Expose a default style for layer groups.
    #[serde(rename = "defaultGroupStyleEnabled", default)]
    pub default_group_style_enabled: bool,

    /// Skip rendering transformations in GetFeatureInfo.
    #[serde(rename = "transformFeatureInfoDisabled", default)]
    pub transform_feature_info_disabled: bool,

    /// HTML-escape values in FreeMarker templates.
    #[serde(rename = "autoEscapeTemplateValues", default)]
    pub auto_escape_template_values: bool,

    /// Title of the root layer in GetCapabilities.
    #[serde(rename = "rootLayerTitle", default, skip_serializing_if = "Option::is_none")]
    pub root_layer_title: Option<String>,
}

/// Watermark drawn on every map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Watermark {
    #[serde(default)]
    pub enabled: bool,
    /// `TOP_LEFT`, `BOT_RIGHT`, ...
    #[serde(default)]
    pub position: String,
    /// 0 (opaque) to 100 (invisible).
    #[serde(default)]
    pub transparency: i32,
}

/// Remote style cache configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CacheConfiguration {
    #[serde(default)]
    pub enabled: bool,
    /// Largest cached entry, in bytes.
    #[serde(rename = "maxEntrySize", default)]
    pub max_entry_size: i64,
    #[serde(rename = "maxEntries", default)]
    pub max_entries: i64,
}

/// `<versions>` list of supported protocol versions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceVersions {
    #[serde(rename = "org.geotools.util.Version", default)]
    pub versions: Vec<ServiceVersion>,
}

/// One supported protocol version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceVersion {
    /// Version string, e.g. `1.3.0`.
    pub version: String,
}

fn wms_settings(workspace: Option<&str>) -> Endpoint {
    let base = Endpoint::new().push("services").push("wms");
    match workspace {
        Some(ws) => base.push("workspaces").push(ws).push("settings"),
        None => base.push("settings"),
    }
}

impl GeoServerClient {
    /// Gets the global WMS settings, or a workspace's override.
    pub async fn get_wms_settings(&self, workspace: Option<&str>) -> Result<WmsSettings> {
        self.fetch(&wms_settings(workspace), StatusTable::READ).await
    }

    /// Replaces the WMS settings. The service name is forced to `WMS`.
    pub async fn update_wms_settings(
        &self,
        workspace: Option<&str>,
        settings: &WmsSettings,
    ) -> Result<()> {
        let settings = WmsSettings {
            name: WMS_SERVICE_NAME.to_string(),
            ..settings.clone()
        };
        self.send_xml(
            Method::PUT,
            &wms_settings(workspace),
            WMS_ROOT,
            &settings,
            StatusTable::SERVICE_UPDATE,
        )
        .await
    }

    /// Removes a workspace's WMS override.
    ///
    /// Global settings cannot be deleted, so `workspace` must not be empty.
    pub async fn delete_wms_settings(&self, workspace: &str) -> Result<()> {
        if workspace.is_empty() {
            return Err(GeoServerError::InvalidArgument(
                "workspace must be defined".to_string(),
            ));
        }
        self.remove(&wms_settings(Some(workspace)), StatusTable::DELETE)
            .await
    }
}
