//
//  geoserver-client
//  api/gwc/gridsets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GeoWebCache gridset operations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a gridset document.
pub const GRIDSET_ROOT: &str = "gridSet";

/// A tiling scheme: CRS, extent, tile size and zoom levels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gridset {
    /// Gridset name, e.g. `EPSG:3857`.
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub srs: GridsetSrs,

    #[serde(default)]
    pub extent: GridsetExtent,

    #[serde(rename = "alignTopLeft", default)]
    pub align_top_left: bool,

    #[serde(rename = "scaleDenominators", default)]
    pub scale_denominators: ScaleDenominators,

    #[serde(rename = "metersPerUnit", default)]
    pub meters_per_unit: f64,

    /// Pixel size in meters, usually `0.00028`.
    #[serde(rename = "pixelSize", default)]
    pub pixel_size: f64,

    #[serde(rename = "scaleNames", default)]
    pub scale_names: ScaleNames,

    #[serde(rename = "tileHeight", default)]
    pub tile_height: u32,

    #[serde(rename = "tileWidth", default)]
    pub tile_width: u32,

    #[serde(rename = "yCoordinateFirst", default)]
    pub y_coordinate_first: bool,
}

/// EPSG code of a gridset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridsetSrs {
    #[serde(default)]
    pub number: u32,
}

/// `<extent><coords>` as minx, miny, maxx, maxy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridsetExtent {
    #[serde(default)]
    pub coords: Coords,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coords {
    #[serde(rename = "double", default)]
    pub values: Vec<f64>,
}

/// One denominator per zoom level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleDenominators {
    #[serde(rename = "double", default)]
    pub values: Vec<f64>,
}

/// One name per zoom level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleNames {
    #[serde(rename = "string", default)]
    pub values: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GridsetList {
    #[serde(rename = "gridSet", default)]
    items: Vec<ResourceRef>,
}

fn gridsets() -> Endpoint {
    Endpoint::new().push("gridsets")
}

fn gridset(name: &str) -> Endpoint {
    gridsets().push(name)
}

impl GeoServerClient {
    /// Lists every gridset with its full definition.
    pub async fn list_gridsets(&self) -> Result<Vec<Gridset>> {
        self.fetch_all(&gridsets(), |l: GridsetList| l.items, gridset)
            .await
    }

    /// Gets a gridset by name, e.g. `EPSG:3857`.
    pub async fn get_gridset(&self, name: &str) -> Result<Gridset> {
        self.fetch(&gridset(name), StatusTable::READ).await
    }

    /// Creates a gridset under `name`.
    pub async fn create_gridset(&self, name: &str, gridset_def: &Gridset) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &gridset(name),
            GRIDSET_ROOT,
            gridset_def,
            StatusTable::PUT_CREATE,
        )
        .await
    }

    /// Replaces the gridset `name`.
    pub async fn update_gridset(&self, name: &str, gridset_def: &Gridset) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &gridset(name),
            GRIDSET_ROOT,
            gridset_def,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a gridset. Built-in gridsets answer
    /// [`Forbidden`](crate::api::GeoServerError::Forbidden).
    pub async fn delete_gridset(&self, name: &str) -> Result<()> {
        self.remove(&gridset(name), StatusTable::DELETE).await
    }
}
