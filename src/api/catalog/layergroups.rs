//
//  geoserver-client
//  api/catalog/layergroups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Layer group API types and operations.
//!
//! A layer group bundles published layers (and other groups) so they can be
//! requested as one. `publishables` and `styles` are parallel lists: the
//! n-th style applies to the n-th published entry, and an empty style slot
//! means "use the layer's default style".
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::api::catalog::LayerGroup;
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! let group = LayerGroup::new("basemap")
//!     .with_layer("osm:water_polygons", Some("osm:water"))
//!     .with_layer("osm:roads", None);
//! client.create_layer_group(Some("osm"), &group).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::APPLICATION_XML;
use crate::api::common::{codec, BoundingBox, Keywords, NamedRef, ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a layer group document.
pub const LAYER_GROUP_ROOT: &str = "layerGroup";

/// A group of published layers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerGroup {
    /// Group name.
    pub name: String,

    /// Owning workspace, absent for global groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<NamedRef>,

    /// `SINGLE`, `NAMED`, `CONTAINER` or `EO`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "abstractTxt", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Members of the group, in drawing order.
    #[serde(default)]
    pub publishables: Publishables,

    /// One style slot per member.
    #[serde(default)]
    pub styles: GroupStyles,

    /// Aggregated bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,

    #[serde(rename = "metadataLinks", default, skip_serializing_if = "Option::is_none")]
    pub metadata_links: Option<MetadataLinks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
}

impl LayerGroup {
    /// Creates an empty group in `SINGLE` mode.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: Some("SINGLE".to_string()),
            ..Default::default()
        }
    }

    /// Appends a layer and its style slot.
    pub fn with_layer(mut self, layer: impl Into<String>, style: Option<&str>) -> Self {
        self.publishables.published.push(Published {
            kind: "layer".to_string(),
            name: layer.into(),
        });
        self.styles.styles.push(StyleSlot {
            name: style.map(str::to_string),
        });
        self
    }
}

/// `<publishables>` list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Publishables {
    #[serde(default)]
    pub published: Vec<Published>,
}

/// One member of a layer group, `<published type="layer">`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Published {
    /// `layer` or `layerGroup`.
    #[serde(rename = "@type")]
    pub kind: String,

    /// Qualified member name, e.g. `osm:roads`.
    pub name: String,
}

/// `<styles>` list of a layer group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupStyles {
    #[serde(rename = "style", default)]
    pub styles: Vec<StyleSlot>,
}

/// A style slot; `None` selects the member's default style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `<metadataLinks>` list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataLinks {
    #[serde(rename = "metadataLink", default)]
    pub links: Vec<MetadataLink>,
}

/// A link to an external metadata record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataLink {
    /// MIME type of the record.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Metadata standard, e.g. `ISO19115:2003` or `FGDC`.
    #[serde(rename = "metadataType")]
    pub metadata_type: String,
    /// URL of the record.
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
struct LayerGroupList {
    #[serde(rename = "layerGroup", default)]
    groups: Vec<ResourceRef>,
}

fn layer_groups(workspace: Option<&str>) -> Endpoint {
    Endpoint::scoped(workspace).push("layergroups")
}

impl GeoServerClient {
    /// Lists layer groups, globally or within a workspace.
    pub async fn list_layer_groups(&self, workspace: Option<&str>) -> Result<Vec<LayerGroup>> {
        self.fetch_all(
            &layer_groups(workspace),
            |l: LayerGroupList| l.groups,
            |name| layer_groups(workspace).push(name),
        )
        .await
    }

    /// Gets a layer group.
    pub async fn get_layer_group(&self, workspace: Option<&str>, name: &str) -> Result<LayerGroup> {
        self.fetch(&layer_groups(workspace).push(name), StatusTable::READ)
            .await
    }

    /// Creates a layer group. The request does not ask for XML back.
    pub async fn create_layer_group(&self, workspace: Option<&str>, group: &LayerGroup) -> Result<()> {
        let endpoint = layer_groups(workspace);
        let body = codec::encode(LAYER_GROUP_ROOT, group)?;
        let response = self
            .fully_typed_request(Method::POST, &endpoint, Some(body), APPLICATION_XML, "")
            .await?;
        StatusTable::CREATE.classify(response.status, &response.body, &endpoint.to_string())
    }

    /// Updates the layer group named `group.name`.
    pub async fn update_layer_group(&self, workspace: Option<&str>, group: &LayerGroup) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &layer_groups(workspace).push(group.name.as_str()),
            LAYER_GROUP_ROOT,
            group,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a layer group. Member layers are left untouched.
    pub async fn delete_layer_group(&self, workspace: Option<&str>, name: &str) -> Result<()> {
        self.remove(&layer_groups(workspace).push(name), StatusTable::DELETE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Crs;
    use crate::api::test_support::client;
    use crate::api::GeoServerError;
    use mockito::Matcher;

    const OSM_GROUP: &str = r#"<layerGroup>
  <name>osm_group</name>
  <mode>SINGLE</mode>
  <title>toto</title>
  <abstractTxt>ABSTRACT</abstractTxt>
  <publishables>
    <published type="layer">
      <name>osm:simplified_water_polygons</name>
      <atom:link xmlns:atom="http://www.w3.org/2005/Atom" rel="alternate" href="http://localhost:8080/geoserver/rest/workspaces/osm/layers/simplified_water_polygons.xml" type="application/xml"/>
    </published>
    <published type="layer">
      <name>osm:water_polygons</name>
    </published>
  </publishables>
  <styles>
    <style>
      <name>osm:simplified_water</name>
    </style>
    <style/>
  </styles>
  <metadataLinks>
    <metadataLink>
      <type>text/plain</type>
      <metadataType>ISO19115:2003</metadataType>
      <content>https://example.com/metadata</content>
    </metadataLink>
  </metadataLinks>
  <bounds>
    <minx>-2</minx>
    <maxx>2</maxx>
    <miny>-2</miny>
    <maxy>2</maxy>
    <crs class="projected">EPSG:3857</crs>
  </bounds>
  <keywords>
    <string>water</string>
  </keywords>
</layerGroup>"#;

    fn osm_group() -> LayerGroup {
        LayerGroup {
            name: "osm_group".to_string(),
            mode: Some("SINGLE".to_string()),
            title: Some("toto".to_string()),
            abstract_text: Some("ABSTRACT".to_string()),
            bounds: Some(BoundingBox {
                minx: -2.0,
                maxx: 2.0,
                miny: -2.0,
                maxy: 2.0,
                crs: Some(Crs {
                    class: Some("projected".to_string()),
                    value: "EPSG:3857".to_string(),
                }),
            }),
            metadata_links: Some(MetadataLinks {
                links: vec![MetadataLink {
                    mime_type: "text/plain".to_string(),
                    metadata_type: "ISO19115:2003".to_string(),
                    content: "https://example.com/metadata".to_string(),
                }],
            }),
            keywords: Some(Keywords {
                values: vec!["water".to_string()],
            }),
            ..Default::default()
        }
        .with_layer("osm:simplified_water_polygons", Some("osm:simplified_water"))
        .with_layer("osm:water_polygons", None)
    }

    #[test]
    fn test_decode_layer_group() {
        let group: LayerGroup = codec::decode(OSM_GROUP).unwrap();
        assert_eq!(group, osm_group());
    }

    #[test]
    fn test_encode_layer_group() {
        let xml = codec::encode(LAYER_GROUP_ROOT, &osm_group()).unwrap();
        assert!(xml.contains(
            r#"<publishables><published type="layer"><name>osm:simplified_water_polygons</name></published>"#
        ));
        assert!(xml.contains("<styles><style><name>osm:simplified_water</name></style>"));
        let again: LayerGroup = codec::decode(&xml).unwrap();
        assert_eq!(again.styles.styles[1].name, None);
    }

    #[tokio::test]
    async fn test_create_layer_group_omits_accept() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces/osm/layergroups")
            .match_header("content-type", "application/xml")
            .match_header("accept", "*/*")
            .match_body(Matcher::Regex("^<layerGroup><name>osm_group</name>".to_string()))
            .with_status(201)
            .create_async()
            .await;

        client(&server)
            .create_layer_group(Some("osm"), &osm_group())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_layer_group_unknown_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/layergroups")
            .with_status(400)
            .with_body("Layer group must not be empty")
            .create_async()
            .await;

        let result = client(&server)
            .create_layer_group(None, &LayerGroup::new("empty"))
            .await;
        match result {
            Err(GeoServerError::Unknown { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "Layer group must not be empty");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_uses_group_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/layergroups/osm_group")
            .with_status(200)
            .create_async()
            .await;

        client(&server)
            .update_layer_group(None, &osm_group())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/osm/layergroups")
            .with_status(200)
            .with_body("<layerGroups><layerGroup><name>osm_group</name></layerGroup></layerGroups>")
            .create_async()
            .await;
        server
            .mock("GET", "/workspaces/osm/layergroups/osm_group")
            .with_status(200)
            .with_body(OSM_GROUP)
            .create_async()
            .await;
        server
            .mock("DELETE", "/workspaces/osm/layergroups/osm_group")
            .with_status(404)
            .create_async()
            .await;

        let c = client(&server);
        assert_eq!(c.list_layer_groups(Some("osm")).await.unwrap(), vec![osm_group()]);
        assert!(matches!(
            c.delete_layer_group(Some("osm"), "osm_group").await,
            Err(GeoServerError::NotFound(_))
        ));
    }
}
