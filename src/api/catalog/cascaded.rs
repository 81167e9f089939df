//
//  geoserver-client
//  api/catalog/cascaded.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cascaded WMS and WMTS stores and layers.
//!
//! A cascaded store points at a remote WMS or WMTS server through its
//! capabilities URL; cascaded layers republish the remote layers locally.
//! Both protocols share one schema, so every operation takes a
//! [`CascadeProtocol`] that selects the endpoints and element names.
//!
//! | | WMS | WMTS |
//! |---|---|---|
//! | Store collection | `/workspaces/{ws}/wmsstores` | `/workspaces/{ws}/wmtsstores` |
//! | Store element | `wmsStore` | `wmtsStore` |
//! | Layer collection | `.../wmslayers` | `.../layers` |
//! | Layer element | `wmsLayer` | `wmtsLayer` |
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::api::catalog::{CascadeProtocol, CascadedStore};
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! let store = CascadedStore::new(
//!     CascadeProtocol::Wmts,
//!     "basemaps",
//!     "https://tiles.example.com/wmts?REQUEST=GetCapabilities",
//! );
//! client.create_cascaded_store(CascadeProtocol::Wmts, "topp", &store).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{
    BoundingBox, Crs, EntryMap, GeoServerError, NamedRef, ResourceRef, Result, StatusTable,
};
use crate::api::{Endpoint, GeoServerClient};

/// The remote protocol of a cascaded store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeProtocol {
    /// Web Map Service.
    Wms,
    /// Web Map Tile Service.
    Wmts,
}

impl CascadeProtocol {
    /// Path segment of the store collection.
    pub fn stores_segment(self) -> &'static str {
        match self {
            Self::Wms => "wmsstores",
            Self::Wmts => "wmtsstores",
        }
    }

    /// Path segment of the layer collection.
    pub fn layers_segment(self) -> &'static str {
        match self {
            Self::Wms => "wmslayers",
            Self::Wmts => "layers",
        }
    }

    /// Root element of a store document.
    pub fn store_root(self) -> &'static str {
        match self {
            Self::Wms => "wmsStore",
            Self::Wmts => "wmtsStore",
        }
    }

    /// Root element of a layer document.
    pub fn layer_root(self) -> &'static str {
        match self {
            Self::Wms => "wmsLayer",
            Self::Wmts => "wmtsLayer",
        }
    }

    /// Value of a store's `<type>` element.
    pub fn store_type(self) -> &'static str {
        match self {
            Self::Wms => "WMS",
            Self::Wmts => "WMTS",
        }
    }
}

/// A store backed by a remote WMS or WMTS server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CascadedStore {
    /// Store name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    /// Owning workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<NamedRef>,

    /// Whether this is the workspace's default store.
    #[serde(rename = "__default", default)]
    pub is_default: bool,

    /// Disable the store when the remote server cannot be reached.
    #[serde(rename = "disableOnConnFailure", default)]
    pub disable_on_conn_failure: bool,

    /// GetCapabilities URL of the remote server.
    #[serde(rename = "capabilitiesURL", default)]
    pub capabilities_url: String,

    /// Size of the HTTP connection pool.
    #[serde(rename = "maxConnections", default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    /// Read timeout in seconds.
    #[serde(rename = "readTimeout", default, skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<u32>,

    /// Connect timeout in seconds.
    #[serde(rename = "connectTimeout", default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u32>,

    /// `WMS` or `WMTS`.
    #[serde(rename = "type", default)]
    pub store_type: String,
}

impl CascadedStore {
    /// Creates an enabled store of the given protocol.
    pub fn new(
        protocol: CascadeProtocol,
        name: impl Into<String>,
        capabilities_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            capabilities_url: capabilities_url.into(),
            store_type: protocol.store_type().to_string(),
            ..Default::default()
        }
    }
}

/// A layer republished from a cascaded store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CascadedLayer {
    /// Local layer name.
    pub name: String,

    /// Layer name on the remote server.
    #[serde(rename = "nativeName", default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(rename = "nativeCRS", default, skip_serializing_if = "Option::is_none")]
    pub native_crs: Option<Crs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srs: Option<String>,

    #[serde(rename = "nativeBoundingBox", default, skip_serializing_if = "Option::is_none")]
    pub native_bounding_box: Option<BoundingBox>,

    #[serde(rename = "latLonBoundingBox", default, skip_serializing_if = "Option::is_none")]
    pub lat_lon_bounding_box: Option<BoundingBox>,

    #[serde(rename = "projectionPolicy", default, skip_serializing_if = "Option::is_none")]
    pub projection_policy: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "EntryMap::is_empty")]
    pub metadata: EntryMap,
}

#[derive(Debug, Default, Deserialize)]
struct CascadedStoreList {
    #[serde(rename = "wmsStore", alias = "wmtsStore", default)]
    stores: Vec<ResourceRef>,
}

#[derive(Debug, Default, Deserialize)]
struct CascadedLayerList {
    #[serde(rename = "wmsLayer", alias = "wmtsLayer", default)]
    layers: Vec<ResourceRef>,
}

fn stores(protocol: CascadeProtocol, workspace: &str) -> Endpoint {
    Endpoint::scoped(Some(workspace)).push(protocol.stores_segment())
}

fn layers(protocol: CascadeProtocol, workspace: &str, store: Option<&str>) -> Result<Endpoint> {
    if workspace.is_empty() {
        return Err(GeoServerError::InvalidArgument(
            "workspace cannot be empty".to_string(),
        ));
    }
    let base = match store {
        Some(s) => stores(protocol, workspace).push(s),
        None => Endpoint::scoped(Some(workspace)),
    };
    Ok(base.push(protocol.layers_segment()))
}

impl GeoServerClient {
    /// Lists the cascaded stores of a workspace.
    pub async fn list_cascaded_stores(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
    ) -> Result<Vec<CascadedStore>> {
        self.fetch_all(
            &stores(protocol, workspace),
            |l: CascadedStoreList| l.stores,
            |name| stores(protocol, workspace).push(name),
        )
        .await
    }

    /// Gets a cascaded store.
    pub async fn get_cascaded_store(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        name: &str,
    ) -> Result<CascadedStore> {
        self.fetch(&stores(protocol, workspace).push(name), StatusTable::READ)
            .await
    }

    /// Creates a cascaded store.
    pub async fn create_cascaded_store(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        store: &CascadedStore,
    ) -> Result<()> {
        self.send_xml(
            Method::POST,
            &stores(protocol, workspace),
            protocol.store_root(),
            store,
            StatusTable::CREATE,
        )
        .await
    }

    /// Replaces the cascaded store `name`.
    pub async fn update_cascaded_store(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        name: &str,
        store: &CascadedStore,
    ) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &stores(protocol, workspace).push(name),
            protocol.store_root(),
            store,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a cascaded store; `recurse` also removes its layers.
    pub async fn delete_cascaded_store(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        name: &str,
        recurse: bool,
    ) -> Result<()> {
        self.remove(
            &stores(protocol, workspace).push(name).flag("recurse", recurse),
            StatusTable::DELETE,
        )
        .await
    }

    /// Lists cascaded layers of a workspace, or of one of its stores.
    pub async fn list_cascaded_layers(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        store: Option<&str>,
    ) -> Result<Vec<CascadedLayer>> {
        let collection = layers(protocol, workspace, store)?;
        self.fetch_all(
            &collection,
            |l: CascadedLayerList| l.layers,
            |name| collection.clone().push(name),
        )
        .await
    }

    /// Gets a cascaded layer.
    pub async fn get_cascaded_layer(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        store: Option<&str>,
        name: &str,
    ) -> Result<CascadedLayer> {
        let endpoint = layers(protocol, workspace, store)?.push(name);
        self.fetch(&endpoint, StatusTable::READ).await
    }

    /// Publishes a cascaded layer.
    pub async fn create_cascaded_layer(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        store: Option<&str>,
        layer: &CascadedLayer,
    ) -> Result<()> {
        let endpoint = layers(protocol, workspace, store)?;
        self.send_xml(
            Method::POST,
            &endpoint,
            protocol.layer_root(),
            layer,
            StatusTable::CREATE,
        )
        .await
    }

    /// Replaces the cascaded layer `name`.
    pub async fn update_cascaded_layer(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        store: Option<&str>,
        name: &str,
        layer: &CascadedLayer,
    ) -> Result<()> {
        let endpoint = layers(protocol, workspace, store)?.push(name);
        self.send_xml(
            Method::PUT,
            &endpoint,
            protocol.layer_root(),
            layer,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a cascaded layer.
    pub async fn delete_cascaded_layer(
        &self,
        protocol: CascadeProtocol,
        workspace: &str,
        store: Option<&str>,
        name: &str,
        recurse: bool,
    ) -> Result<()> {
        let endpoint = layers(protocol, workspace, store)?
            .push(name)
            .flag("recurse", recurse);
        self.remove(&endpoint, StatusTable::DELETE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::codec;
    use crate::api::test_support::client;
    use mockito::Matcher;

    const WMTS_STORE: &str = r#"<wmtsStore>
  <name>basemaps</name>
  <description>Remote tiles</description>
  <enabled>true</enabled>
  <workspace><name>topp</name></workspace>
  <__default>false</__default>
  <disableOnConnFailure>true</disableOnConnFailure>
  <capabilitiesURL>https://tiles.example.com/wmts?REQUEST=GetCapabilities</capabilitiesURL>
  <maxConnections>6</maxConnections>
  <readTimeout>60</readTimeout>
  <connectTimeout>30</connectTimeout>
  <type>WMTS</type>
</wmtsStore>"#;

    const WMS_LAYER: &str = r#"<wmsLayer>
  <name>states</name>
  <nativeName>topp:states</nativeName>
  <title>USA Population</title>
  <nativeCRS>GEOGCS["WGS 84"]</nativeCRS>
  <srs>EPSG:4326</srs>
  <latLonBoundingBox>
    <minx>-124.73</minx>
    <maxx>-66.97</maxx>
    <miny>24.96</miny>
    <maxy>49.37</maxy>
    <crs>EPSG:4326</crs>
  </latLonBoundingBox>
  <projectionPolicy>FORCE_DECLARED</projectionPolicy>
  <enabled>true</enabled>
  <metadata>
    <entry key="time"><dimensionInfo><enabled>false</enabled><defaultValue/></dimensionInfo></entry>
    <entry key="cachingEnabled">false</entry>
  </metadata>
</wmsLayer>"#;

    #[test]
    fn test_protocol_tables() {
        assert_eq!(CascadeProtocol::Wms.layers_segment(), "wmslayers");
        assert_eq!(CascadeProtocol::Wmts.layers_segment(), "layers");
        assert_eq!(CascadeProtocol::Wmts.store_root(), "wmtsStore");
        assert_eq!(
            CascadedStore::new(CascadeProtocol::Wms, "a", "http://x").store_type,
            "WMS"
        );
    }

    #[test]
    fn test_decode_store_and_layer() {
        let store: CascadedStore = codec::decode(WMTS_STORE).unwrap();
        assert!(store.disable_on_conn_failure);
        assert_eq!(store.max_connections, Some(6));
        assert_eq!(store.store_type, "WMTS");

        let layer: CascadedLayer = codec::decode(WMS_LAYER).unwrap();
        assert_eq!(layer.native_name.as_deref(), Some("topp:states"));
        assert_eq!(layer.metadata.get("cachingEnabled"), Some("false"));
        assert_eq!(layer.native_crs.unwrap().class, None);
    }

    #[test]
    fn test_layer_round_trip_keeps_time_dimension() {
        let layer: CascadedLayer = codec::decode(WMS_LAYER).unwrap();
        assert!(!layer.metadata.dimension("time").unwrap().enabled);

        let xml = codec::encode(CascadeProtocol::Wms.layer_root(), &layer).unwrap();
        assert!(xml.contains(
            r#"<metadata><entry key="time"><dimensionInfo><enabled>false</enabled>"#
        ));
        assert!(xml.contains(r#"<entry key="cachingEnabled">false</entry></metadata>"#));

        let again: CascadedLayer = codec::decode(&xml).unwrap();
        assert_eq!(again, layer);
    }

    #[test]
    fn test_store_round_trip() {
        let store: CascadedStore = codec::decode(WMTS_STORE).unwrap();
        let xml = codec::encode(CascadeProtocol::Wmts.store_root(), &store).unwrap();
        let again: CascadedStore = codec::decode(&xml).unwrap();
        assert_eq!(again, store);
    }

    #[tokio::test]
    async fn test_wmts_store_endpoints() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/topp/wmtsstores")
            .with_status(200)
            .with_body("<wmtsStores><wmtsStore><name>basemaps</name></wmtsStore></wmtsStores>")
            .create_async()
            .await;
        server
            .mock("GET", "/workspaces/topp/wmtsstores/basemaps")
            .with_status(200)
            .with_body(WMTS_STORE)
            .create_async()
            .await;
        let create = server
            .mock("POST", "/workspaces/topp/wmtsstores")
            .match_body(Matcher::Regex("^<wmtsStore><name>basemaps</name>.*<type>WMTS</type></wmtsStore>$".to_string()))
            .with_status(201)
            .create_async()
            .await;

        let c = client(&server);
        let list = c
            .list_cascaded_stores(CascadeProtocol::Wmts, "topp")
            .await
            .unwrap();
        assert_eq!(list.len(), 1);

        c.create_cascaded_store(CascadeProtocol::Wmts, "topp", &list[0])
            .await
            .unwrap();
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_wms_layer_endpoints() {
        let mut server = mockito::Server::new_async().await;
        let scoped = server
            .mock("GET", "/workspaces/topp/wmsstores/remote/wmslayers/states")
            .with_status(200)
            .with_body(WMS_LAYER)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/workspaces/topp/wmslayers/states")
            .match_query(Matcher::UrlEncoded("recurse".into(), "true".into()))
            .with_status(200)
            .create_async()
            .await;
        let wmts = server
            .mock("PUT", "/workspaces/topp/wmtsstores/basemaps/layers/roads")
            .match_body(Matcher::Regex("^<wmtsLayer>".to_string()))
            .with_status(200)
            .create_async()
            .await;

        let c = client(&server);
        let layer = c
            .get_cascaded_layer(CascadeProtocol::Wms, "topp", Some("remote"), "states")
            .await
            .unwrap();
        assert_eq!(layer.name, "states");
        c.delete_cascaded_layer(CascadeProtocol::Wms, "topp", None, "states", true)
            .await
            .unwrap();
        c.update_cascaded_layer(
            CascadeProtocol::Wmts,
            "topp",
            Some("basemaps"),
            "roads",
            &CascadedLayer {
                name: "roads".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        scoped.assert_async().await;
        delete.assert_async().await;
        wmts.assert_async().await;
    }

    #[tokio::test]
    async fn test_layers_require_workspace() {
        let server = mockito::Server::new_async().await;
        let result = client(&server)
            .list_cascaded_layers(CascadeProtocol::Wms, "", None)
            .await;
        assert!(matches!(result, Err(GeoServerError::InvalidArgument(_))));
    }
}
