//
//  geoserver-client
//  api/catalog/featuretypes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Feature type API types and operations.
//!
//! A feature type publishes one table or file of a datastore. Feature types
//! are always addressed within a workspace; the datastore segment is
//! optional, in which case GeoServer uses the workspace's default store.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{
    BoundingBox, ClassedRef, Crs, GeoServerError, Keywords, NamedRef, ResourceRef, Result,
    StatusTable,
};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a feature type document.
pub const FEATURE_TYPE_ROOT: &str = "featureType";

/// A published vector resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureType {
    /// Published name.
    pub name: String,

    /// Name of the underlying table or file.
    #[serde(rename = "nativeName", default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,

    /// Namespace the feature type is published under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<NamedRef>,

    /// Human readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Abstract.
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,

    /// CRS of the stored data, as a code or WKT.
    #[serde(rename = "nativeCRS", default, skip_serializing_if = "Option::is_none")]
    pub native_crs: Option<Crs>,

    /// Declared CRS code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srs: Option<String>,

    /// Bounds in the native CRS.
    #[serde(rename = "nativeBoundingBox", default, skip_serializing_if = "Option::is_none")]
    pub native_bounding_box: Option<BoundingBox>,

    /// Bounds in WGS84.
    #[serde(rename = "latLonBoundingBox", default, skip_serializing_if = "Option::is_none")]
    pub lat_lon_bounding_box: Option<BoundingBox>,

    /// `FORCE_DECLARED`, `REPROJECT_TO_DECLARED` or `NONE`.
    #[serde(rename = "projectionPolicy", default, skip_serializing_if = "Option::is_none")]
    pub projection_policy: Option<String>,

    /// Whether the feature type is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Owning store, read-only.
    #[serde(default, skip_serializing)]
    pub store: Option<ClassedRef>,

    /// Attribute schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<FeatureTypeAttributes>,
}

/// The `<attributes>` list of a feature type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureTypeAttributes {
    /// The attributes, in schema order.
    #[serde(rename = "attribute", default)]
    pub attributes: Vec<FeatureTypeAttribute>,
}

/// One attribute of a feature type schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureTypeAttribute {
    /// Attribute name.
    pub name: String,
    #[serde(rename = "minOccurs", default)]
    pub min_occurs: i32,
    #[serde(rename = "maxOccurs", default)]
    pub max_occurs: i32,
    #[serde(default)]
    pub nillable: bool,
    /// Java binding, e.g. `java.lang.String` or `org.locationtech.jts.geom.Point`.
    #[serde(default)]
    pub binding: String,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureTypeList {
    #[serde(rename = "featureType", default)]
    feature_types: Vec<ResourceRef>,
}

fn feature_types(workspace: &str, datastore: Option<&str>) -> Result<Endpoint> {
    if workspace.is_empty() {
        return Err(GeoServerError::InvalidArgument(
            "workspace cannot be empty".to_string(),
        ));
    }
    let base = Endpoint::scoped(Some(workspace));
    let base = match datastore {
        Some(ds) => base.push("datastores").push(ds),
        None => base,
    };
    Ok(base.push("featuretypes"))
}

impl GeoServerClient {
    /// Lists feature types of a workspace, or of one of its datastores.
    pub async fn list_feature_types(
        &self,
        workspace: &str,
        datastore: Option<&str>,
    ) -> Result<Vec<FeatureType>> {
        let collection = feature_types(workspace, datastore)?;
        self.fetch_all(
            &collection,
            |l: FeatureTypeList| l.feature_types,
            |name| collection.clone().push(name),
        )
        .await
    }

    /// Gets a feature type.
    pub async fn get_feature_type(
        &self,
        workspace: &str,
        datastore: Option<&str>,
        name: &str,
    ) -> Result<FeatureType> {
        let endpoint = feature_types(workspace, datastore)?.push(name);
        self.fetch(&endpoint, StatusTable::READ).await
    }

    /// Publishes a feature type.
    pub async fn create_feature_type(
        &self,
        workspace: &str,
        datastore: Option<&str>,
        feature_type: &FeatureType,
    ) -> Result<()> {
        let endpoint = feature_types(workspace, datastore)?;
        self.send_xml(
            Method::POST,
            &endpoint,
            FEATURE_TYPE_ROOT,
            feature_type,
            StatusTable::CREATE,
        )
        .await
    }

    /// Replaces the feature type `name`.
    pub async fn update_feature_type(
        &self,
        workspace: &str,
        datastore: Option<&str>,
        name: &str,
        feature_type: &FeatureType,
    ) -> Result<()> {
        let endpoint = feature_types(workspace, datastore)?.push(name);
        self.send_xml(
            Method::PUT,
            &endpoint,
            FEATURE_TYPE_ROOT,
            feature_type,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a feature type; `recurse` also removes the layers publishing it.
    pub async fn delete_feature_type(
        &self,
        workspace: &str,
        datastore: Option<&str>,
        name: &str,
        recurse: bool,
    ) -> Result<()> {
        let endpoint = feature_types(workspace, datastore)?
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

    const ROADS: &str = r#"<featureType>
  <name>roads</name>
  <nativeName>roads</nativeName>
  <namespace><name>sf</name></namespace>
  <title>Spearfish roads</title>
  <abstract>Sample data from GRASS</abstract>
  <keywords>
    <string>sfRoads</string>
    <string>spearfish</string>
  </keywords>
  <nativeCRS class="projected">PROJCS["NAD27 / UTM zone 13N"]</nativeCRS>
  <srs>EPSG:26713</srs>
  <nativeBoundingBox>
    <minx>589434.856</minx>
    <maxx>609527.21</maxx>
    <miny>4914006.338</miny>
    <maxy>4928063.398</maxy>
    <crs class="projected">EPSG:26713</crs>
  </nativeBoundingBox>
  <latLonBoundingBox>
    <minx>-103.877</minx>
    <maxx>-103.62</maxx>
    <miny>44.371</miny>
    <maxy>44.5</maxy>
    <crs>EPSG:4326</crs>
  </latLonBoundingBox>
  <projectionPolicy>FORCE_DECLARED</projectionPolicy>
  <enabled>true</enabled>
  <store class="dataStore">
    <name>sf:sf</name>
  </store>
  <attributes>
    <attribute>
      <name>the_geom</name>
      <minOccurs>0</minOccurs>
      <maxOccurs>1</maxOccurs>
      <nillable>true</nillable>
      <binding>org.locationtech.jts.geom.MultiLineString</binding>
    </attribute>
    <attribute>
      <name>cat</name>
      <minOccurs>0</minOccurs>
      <maxOccurs>1</maxOccurs>
      <nillable>true</nillable>
      <binding>java.lang.Long</binding>
    </attribute>
  </attributes>
</featureType>"#;

    #[test]
    fn test_decode_feature_type() {
        let ft: FeatureType = codec::decode(ROADS).unwrap();
        assert_eq!(ft.name, "roads");
        assert_eq!(ft.keywords.unwrap().values, vec!["sfRoads", "spearfish"]);
        assert_eq!(ft.native_crs.unwrap().class.as_deref(), Some("projected"));
        let bbox = ft.lat_lon_bounding_box.unwrap();
        assert_eq!(bbox.minx, -103.877);
        assert_eq!(bbox.crs, Some(Crs::code("EPSG:4326")));
        assert_eq!(ft.store.unwrap().class.as_deref(), Some("dataStore"));
        let attrs = ft.attributes.unwrap().attributes;
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[1].binding, "java.lang.Long");
    }

    #[test]
    fn test_round_trip_keeps_fields() {
        let ft: FeatureType = codec::decode(ROADS).unwrap();
        let xml = codec::encode(FEATURE_TYPE_ROOT, &ft).unwrap();
        let again: FeatureType = codec::decode(&xml).unwrap();
        assert_eq!(again, FeatureType { store: None, ..ft });
    }

    #[tokio::test]
    async fn test_empty_workspace_is_rejected() {
        let server = mockito::Server::new_async().await;
        let result = client(&server).list_feature_types("", None).await;
        assert!(matches!(result, Err(GeoServerError::InvalidArgument(_))));

        let result = client(&server)
            .delete_feature_type("", Some("sf"), "roads", false)
            .await;
        assert!(matches!(result, Err(GeoServerError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_endpoints_with_and_without_store() {
        let mut server = mockito::Server::new_async().await;
        let scoped = server
            .mock("GET", "/workspaces/sf/datastores/sf/featuretypes/roads")
            .with_status(200)
            .with_body(ROADS)
            .create_async()
            .await;
        let unscoped = server
            .mock("DELETE", "/workspaces/sf/featuretypes/roads")
            .match_query(Matcher::UrlEncoded("recurse".into(), "true".into()))
            .with_status(200)
            .create_async()
            .await;

        let c = client(&server);
        c.get_feature_type("sf", Some("sf"), "roads").await.unwrap();
        c.delete_feature_type("sf", None, "roads", true).await.unwrap();

        scoped.assert_async().await;
        unscoped.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_feature_types_surfaces_item_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/sf/featuretypes")
            .with_status(200)
            .with_body("<featureTypes><featureType><name>roads</name></featureType></featureTypes>")
            .create_async()
            .await;
        server
            .mock("GET", "/workspaces/sf/featuretypes/roads")
            .with_status(401)
            .create_async()
            .await;

        let result = client(&server).list_feature_types("sf", None).await;
        assert!(matches!(result, Err(GeoServerError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_create_feature_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces/sf/datastores/sf/featuretypes")
            .match_body(Matcher::Regex("^<featureType><name>streams</name>".to_string()))
            .with_status(201)
            .create_async()
            .await;

        let ft = FeatureType {
            name: "streams".to_string(),
            enabled: true,
            ..Default::default()
        };
        client(&server)
            .create_feature_type("sf", Some("sf"), &ft)
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
