//
//  geoserver-client
//  api/catalog/datastores.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Datastore API types and operations.
//!
//! A datastore is a vector data source (shapefile directory, PostGIS
//! database, ...) inside a workspace. How to reach the data is described by
//! free-form `connectionParameters`.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::api::catalog::Datastore;
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! let store = Datastore::new("roads")
//!     .with_parameter("dbtype", "postgis")
//!     .with_parameter("host", "db.internal")
//!     .with_parameter("database", "gis");
//! client.create_datastore("topp", &store).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{EntryMap, LinkHolder, MetadataEntry, NamedRef, ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a datastore document.
pub const DATASTORE_ROOT: &str = "dataStore";

/// A vector datastore.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Datastore {
    /// Store name, unique within its workspace.
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Store type as reported by GeoServer, e.g. `Shapefile` or `PostGIS`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,

    /// Whether the store is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Owning workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<NamedRef>,

    /// Connection parameters (`url`, `dbtype`, `host`, ...).
    #[serde(rename = "connectionParameters", default)]
    pub connection_parameters: EntryMap,

    /// Whether this is the workspace's default store.
    #[serde(rename = "__default", default)]
    pub is_default: bool,

    /// Link to the feature type collection.
    #[serde(rename = "featureTypes", default, skip_serializing)]
    pub feature_types: Option<LinkHolder>,
}

impl Datastore {
    /// Creates an enabled datastore with no connection parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            ..Default::default()
        }
    }

    /// Adds one connection parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.connection_parameters
            .entries
            .push(MetadataEntry::new(key, value));
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct DatastoreList {
    #[serde(rename = "dataStore", default)]
    stores: Vec<ResourceRef>,
}

fn datastores(workspace: &str) -> Endpoint {
    Endpoint::scoped(Some(workspace)).push("datastores")
}

impl GeoServerClient {
    /// Lists the datastores of a workspace with their full records.
    pub async fn list_datastores(&self, workspace: &str) -> Result<Vec<Datastore>> {
        self.fetch_all(
            &datastores(workspace),
            |l: DatastoreList| l.stores,
            |name| datastores(workspace).push(name),
        )
        .await
    }

    /// Gets a datastore.
    pub async fn get_datastore(&self, workspace: &str, name: &str) -> Result<Datastore> {
        self.fetch(&datastores(workspace).push(name), StatusTable::READ)
            .await
    }

    /// Creates a datastore in `workspace`.
    pub async fn create_datastore(&self, workspace: &str, datastore: &Datastore) -> Result<()> {
        self.send_xml(
            Method::POST,
            &datastores(workspace),
            DATASTORE_ROOT,
            datastore,
            StatusTable::CREATE,
        )
        .await
    }

    /// Replaces the datastore `name`.
    pub async fn update_datastore(
        &self,
        workspace: &str,
        name: &str,
        datastore: &Datastore,
    ) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &datastores(workspace).push(name),
            DATASTORE_ROOT,
            datastore,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a datastore; `recurse` also removes its feature types and layers.
    pub async fn delete_datastore(&self, workspace: &str, name: &str, recurse: bool) -> Result<()> {
        self.remove(
            &datastores(workspace).push(name).flag("recurse", recurse),
            StatusTable::DELETE,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::codec;
    use crate::api::test_support::{client, ADMIN_AUTH};
    use crate::api::GeoServerError;
    use mockito::Matcher;

    const SF: &str = r#"<dataStore>
  <name>sf</name>
  <description>Sample shapefiles</description>
  <type>Directory of spatial files (shapefiles)</type>
  <enabled>true</enabled>
  <workspace>
    <name>foo</name>
    <atom:link xmlns:atom="http://www.w3.org/2005/Atom" rel="alternate" href="http://localhost:8080/geoserver/rest/workspaces/foo.xml" type="application/xml"/>
  </workspace>
  <connectionParameters>
    <entry key="url">file:data/sf</entry>
    <entry key="namespace">http://www.openplans.org/spearfish</entry>
  </connectionParameters>
  <__default>false</__default>
  <featureTypes>
    <atom:link xmlns:atom="http://www.w3.org/2005/Atom" rel="alternate" href="http://localhost:8080/geoserver/rest/workspaces/foo/datastores/sf/featuretypes.xml" type="application/xml"/>
  </featureTypes>
</dataStore>"#;

    fn sf() -> Datastore {
        Datastore {
            name: "sf".to_string(),
            description: Some("Sample shapefiles".to_string()),
            store_type: Some("Directory of spatial files (shapefiles)".to_string()),
            enabled: true,
            workspace: Some(NamedRef::new("foo")),
            connection_parameters: [
                ("url", "file:data/sf"),
                ("namespace", "http://www.openplans.org/spearfish"),
            ]
            .into_iter()
            .collect(),
            is_default: false,
            feature_types: Some(LinkHolder {
                link: Some(crate::api::common::AtomLink {
                    href: "http://localhost:8080/geoserver/rest/workspaces/foo/datastores/sf/featuretypes.xml"
                        .to_string(),
                }),
            }),
        }
    }

    #[test]
    fn test_decode_datastore() {
        let store: Datastore = codec::decode(SF).unwrap();
        assert_eq!(store, sf());
        assert_eq!(store.connection_parameters.get("url"), Some("file:data/sf"));
    }

    #[test]
    fn test_encode_datastore() {
        let xml = codec::encode(DATASTORE_ROOT, &sf()).unwrap();
        assert!(xml.starts_with("<dataStore><name>sf</name>"));
        assert!(xml.contains("<workspace><name>foo</name></workspace>"));
        assert!(xml.contains(r#"<entry key="url">file:data/sf</entry>"#));
        assert!(xml.contains("<__default>false</__default>"));
        assert!(!xml.contains("featureTypes"));
    }

    #[tokio::test]
    async fn test_list_datastores_fetches_each_item() {
        let mut server = mockito::Server::new_async().await;
        let list = server
            .mock("GET", "/workspaces/foo/datastores")
            .match_header("authorization", ADMIN_AUTH)
            .with_status(200)
            .with_body(
                r#"<dataStores>
  <dataStore>
    <name>sf</name>
    <atom:link xmlns:atom="http://www.w3.org/2005/Atom" rel="alternate" href="http://localhost:8080/geoserver/rest/workspaces/foo/datastores/sf.xml" type="application/xml"/>
  </dataStore>
</dataStores>"#,
            )
            .expect(1)
            .create_async()
            .await;
        let item = server
            .mock("GET", "/workspaces/foo/datastores/sf")
            .match_header("authorization", ADMIN_AUTH)
            .with_status(200)
            .with_body(SF)
            .expect(1)
            .create_async()
            .await;

        let stores = client(&server).list_datastores("foo").await.unwrap();

        assert_eq!(stores, vec![sf()]);
        list.assert_async().await;
        item.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_datastores_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/foo/datastores")
            .with_status(401)
            .create_async()
            .await;

        let result = client(&server).list_datastores("foo").await;
        assert!(matches!(result, Err(GeoServerError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_create_datastore() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces/foo/datastores")
            .match_body(Matcher::Regex(
                r#"^<dataStore><name>roads</name><enabled>true</enabled>.*<entry key="dbtype">postgis</entry>"#.to_string(),
            ))
            .with_status(201)
            .create_async()
            .await;

        let store = Datastore::new("roads").with_parameter("dbtype", "postgis");
        client(&server).create_datastore("foo", &store).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_datastore_statuses() {
        let cases = [
            (200, "ok"),
            (401, "unauthorized"),
            (403, "not empty"),
            (404, "not found"),
            (405, "forbidden"),
            (502, "unknown"),
        ];
        for (status, expected) in cases {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("DELETE", "/workspaces/foo/datastores/sf")
                .match_query(Matcher::UrlEncoded("recurse".into(), "true".into()))
                .with_status(status)
                .create_async()
                .await;

            let result = client(&server).delete_datastore("foo", "sf", true).await;
            let kind = match result {
                Ok(()) => "ok",
                Err(GeoServerError::Unauthorized) => "unauthorized",
                Err(GeoServerError::NotEmpty(_)) => "not empty",
                Err(GeoServerError::NotFound(_)) => "not found",
                Err(GeoServerError::Forbidden(_)) => "forbidden",
                Err(GeoServerError::Unknown { .. }) => "unknown",
                Err(e) => panic!("unexpected {:?}", e),
            };
            assert_eq!(kind, expected, "status {}", status);
        }
    }
}
