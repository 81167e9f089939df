//
//  geoserver-client
//  api/gwc/layers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GeoWebCache cached WMS layer operations.
//!
//! A cached WMS layer fronts a remote (or local) WMS endpoint and stores
//! the rendered tiles in a blobstore.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::gwc::GwcWmsLayer;
//! use geoserver_client::api::GeoServerClient;
//!
//! # async fn run(gwc: GeoServerClient) -> geoserver_client::api::Result<()> {
//! let layer = GwcWmsLayer::new("osm:roads", "https://tiles.example.org/wms", "roads")
//!     .with_gridset("EPSG:3857")
//!     .with_format("image/png");
//! gwc.create_gwc_layer(&layer.name, &layer).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a cached WMS layer.
pub const GWC_WMS_LAYER_ROOT: &str = "wmsLayer";

/// A tile-cached WMS layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GwcWmsLayer {
    pub name: String,

    #[serde(default)]
    pub enabled: bool,

    /// Target blobstore; empty for the default one.
    #[serde(rename = "blobStoreId", default)]
    pub blob_store_id: String,

    #[serde(rename = "mimeFormats", default)]
    pub mime_formats: MimeFormats,

    #[serde(rename = "gridSubsets", default)]
    pub grid_subsets: GridSubsets,

    /// Metatile width and height.
    #[serde(rename = "metaWidthHeight", default)]
    pub meta_width_height: MetaTileSize,

    /// Server-side cache expiry, in seconds.
    #[serde(rename = "expireCache", default)]
    pub expire_cache: i32,

    /// Client-side cache expiry, in seconds.
    #[serde(rename = "expireClients", default)]
    pub expire_clients: i32,

    /// Gutter around each metatile, in pixels.
    #[serde(default)]
    pub gutter: u32,

    /// Backend request timeout, in seconds.
    #[serde(rename = "backendTimeout", default)]
    pub backend_timeout: u32,

    #[serde(rename = "cacheBypassAllowed", default)]
    pub cache_bypass_allowed: bool,

    #[serde(rename = "wmsUrl", default)]
    pub wms_url: WmsUrls,

    /// Comma-separated backend layer names.
    #[serde(rename = "wmsLayers", default)]
    pub wms_layers: String,

    #[serde(rename = "wmsVersion", default, skip_serializing_if = "Option::is_none")]
    pub wms_version: Option<String>,

    /// Extra query string appended to backend requests.
    #[serde(rename = "vendorParameters", default, skip_serializing_if = "Option::is_none")]
    pub vendor_parameters: Option<String>,

    #[serde(default)]
    pub transparent: bool,

    /// Background color as `0xRRGGBB`.
    #[serde(rename = "bgColor", default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

impl GwcWmsLayer {
    /// An enabled layer caching `wms_layers` from `wms_url`, with 4x4 metatiles.
    pub fn new(
        name: impl Into<String>,
        wms_url: impl Into<String>,
        wms_layers: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            meta_width_height: MetaTileSize::new(4, 4),
            wms_url: WmsUrls {
                urls: vec![wms_url.into()],
            },
            wms_layers: wms_layers.into(),
            ..Default::default()
        }
    }

    /// Adds a gridset subset covering every zoom level.
    pub fn with_gridset(mut self, gridset: impl Into<String>) -> Self {
        self.grid_subsets.subsets.push(GridSubset::new(gridset));
        self
    }

    /// Adds a cached image format.
    pub fn with_format(mut self, mime: impl Into<String>) -> Self {
        self.mime_formats.formats.push(mime.into());
        self
    }
}

/// `<mimeFormats>`: the image formats tiles are cached in, e.g. `image/png`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MimeFormats {
    #[serde(rename = "string", default)]
    pub formats: Vec<String>,
}

/// `<gridSubsets>`: one entry per gridset the layer is cached for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSubsets {
    #[serde(rename = "gridSubset", default)]
    pub subsets: Vec<GridSubset>,
}

/// Zoom range of a gridset to cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSubset {
    #[serde(rename = "gridSetName")]
    pub gridset_name: String,

    #[serde(rename = "minCachedLevel", default, skip_serializing_if = "Option::is_none")]
    pub min_cached_level: Option<u32>,

    #[serde(rename = "maxCachedLevel", default, skip_serializing_if = "Option::is_none")]
    pub max_cached_level: Option<u32>,
}

impl GridSubset {
    pub fn new(gridset_name: impl Into<String>) -> Self {
        Self {
            gridset_name: gridset_name.into(),
            min_cached_level: None,
            max_cached_level: None,
        }
    }
}

/// `<metaWidthHeight><int>w</int><int>h</int></metaWidthHeight>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetaTileSize {
    #[serde(rename = "int", default)]
    pub values: Vec<u32>,
}

impl MetaTileSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            values: vec![width, height],
        }
    }

    pub fn width(&self) -> Option<u32> {
        self.values.first().copied()
    }

    pub fn height(&self) -> Option<u32> {
        self.values.get(1).copied()
    }
}

/// Backend WMS endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WmsUrls {
    #[serde(rename = "string", default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GwcLayerList {
    #[serde(rename = "layer", default)]
    items: Vec<ResourceRef>,
}

fn gwc_layers() -> Endpoint {
    Endpoint::new().push("layers")
}

fn gwc_layer(name: &str) -> Endpoint {
    gwc_layers().push(name)
}

impl GeoServerClient {
    /// Lists cached layer names.
    ///
    /// The collection also holds GeoServer-backed layers, which do not
    /// decode as [`GwcWmsLayer`], so only the references are returned.
    pub async fn list_gwc_layers(&self) -> Result<Vec<ResourceRef>> {
        let list: GwcLayerList = self.fetch_collection(&gwc_layers()).await?;
        Ok(list.items)
    }

    /// Gets a cached WMS layer. GeoWebCache may answer 200 or 201.
    pub async fn get_gwc_layer(&self, name: &str) -> Result<GwcWmsLayer> {
        self.fetch(&gwc_layer(name), StatusTable::GWC_READ).await
    }

    /// Creates a cached WMS layer under `name`.
    pub async fn create_gwc_layer(&self, name: &str, layer: &GwcWmsLayer) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &gwc_layer(name),
            GWC_WMS_LAYER_ROOT,
            layer,
            StatusTable::PUT_CREATE,
        )
        .await
    }

    pub async fn update_gwc_layer(&self, name: &str, layer: &GwcWmsLayer) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &gwc_layer(name),
            GWC_WMS_LAYER_ROOT,
            layer,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a cached layer and its tiles.
    pub async fn delete_gwc_layer(&self, name: &str) -> Result<()> {
        self.remove(&gwc_layer(name), StatusTable::DELETE).await
    }
}
