//
//  geoserver-client
//  api/catalog/layers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Layer API types and operations.
//!
//! A layer is the published face of a resource (feature type, coverage or
//! cascaded layer): its styling, attribution and metadata. GeoServer creates
//! layers implicitly when the resource is published, so there is no create
//! operation here.
//!
//! Layers can be addressed globally (`/layers/{name}`, with `ws:name`
//! naming) or inside a workspace (`/workspaces/{ws}/layers/{name}`).

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ClassedRef, EntryMap, NamedRef, ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a layer document.
pub const LAYER_ROOT: &str = "layer";

/// A published layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name.
    pub name: String,

    /// WMS capabilities path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// `VECTOR`, `RASTER`, `WMS`, `WMTS` or `GROUP`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub layer_type: Option<String>,

    /// Default style.
    #[serde(rename = "defaultStyle", default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<NamedRef>,

    /// Alternate styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<LayerStyles>,

    /// The published resource, e.g. `<resource class="featureType">`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ClassedRef>,

    /// Whether the layer is opaque.
    #[serde(default)]
    pub opaque: bool,

    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "EntryMap::is_empty")]
    pub metadata: EntryMap,

    /// Data provider attribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,
}

/// The `<styles>` set of a layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerStyles {
    /// Java collection alias, usually `linked-hash-set`.
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Style references.
    #[serde(rename = "style", default)]
    pub styles: Vec<NamedRef>,
}

/// Data provider attribution shown in capabilities documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribution {
    /// Provider name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Provider URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(rename = "logoURL", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(rename = "logoWidth", default)]
    pub logo_width: u32,

    #[serde(rename = "logoHeight", default)]
    pub logo_height: u32,

    /// Logo MIME type.
    #[serde(rename = "logoType", default, skip_serializing_if = "Option::is_none")]
    pub logo_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LayerList {
    #[serde(rename = "layer", default)]
    layers: Vec<ResourceRef>,
}

fn layers(workspace: Option<&str>) -> Endpoint {
    Endpoint::scoped(workspace).push("layers")
}

impl GeoServerClient {
    /// Lists layers, globally or within a workspace.
    pub async fn list_layers(&self, workspace: Option<&str>) -> Result<Vec<Layer>> {
        self.fetch_all(
            &layers(workspace),
            |l: LayerList| l.layers,
            |name| layers(workspace).push(name),
        )
        .await
    }

    /// Gets a layer.
    pub async fn get_layer(&self, workspace: Option<&str>, name: &str) -> Result<Layer> {
        self.fetch(&layers(workspace).push(name), StatusTable::READ)
            .await
    }

    /// Replaces the layer `name`.
    pub async fn update_layer(&self, workspace: Option<&str>, name: &str, layer: &Layer) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &layers(workspace).push(name),
            LAYER_ROOT,
            layer,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a layer; `recurse` also removes it from layer groups.
    pub async fn delete_layer(&self, workspace: Option<&str>, name: &str, recurse: bool) -> Result<()> {
        self.remove(
            &layers(workspace).push(name).flag("recurse", recurse),
            StatusTable::DELETE,
        )
        .await
    }
}
