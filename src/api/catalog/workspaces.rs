//
//  geoserver-client
//  api/catalog/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace API types and operations.
//!
//! Workspaces are the top-level containers of the GeoServer catalog. Stores,
//! feature types and (optionally) styles and layer groups live inside one.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::api::catalog::Workspace;
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! client.create_workspace(&Workspace::new("topp"), true).await?;
//! let ws = client.get_workspace("topp").await?;
//! assert_eq!(ws.name, "topp");
//! client.delete_workspace("topp", true).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{LinkHolder, ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a workspace document.
pub const WORKSPACE_ROOT: &str = "workspace";

/// A GeoServer workspace.
///
/// # Fields
///
/// * `name` - Unique workspace name, also its URL segment
/// * `isolated` - Whether the workspace is only visible through its virtual service
/// * `data_stores`, `coverage_stores`, `wms_stores` - Read-only links to the
///   store collections
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace name.
    pub name: String,

    /// Isolated workspaces are hidden from the global services.
    #[serde(default)]
    pub isolated: bool,

    /// Link to the datastore collection.
    #[serde(rename = "dataStores", default, skip_serializing)]
    pub data_stores: Option<LinkHolder>,

    /// Link to the coverage store collection.
    #[serde(rename = "coverageStores", default, skip_serializing)]
    pub coverage_stores: Option<LinkHolder>,

    /// Link to the WMS store collection.
    #[serde(rename = "wmsStores", default, skip_serializing)]
    pub wms_stores: Option<LinkHolder>,
}

impl Workspace {
    /// Creates a non-isolated workspace named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// `<workspaces>` collection.
#[derive(Debug, Default, Deserialize)]
struct WorkspaceList {
    #[serde(rename = "workspace", default)]
    workspaces: Vec<ResourceRef>,
}

fn workspaces() -> Endpoint {
    Endpoint::new().push("workspaces")
}

fn workspace(name: &str) -> Endpoint {
    workspaces().push(name)
}

impl GeoServerClient {
    /// Lists all workspaces with their full records.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        self.fetch_all(&workspaces(), |l: WorkspaceList| l.workspaces, workspace)
            .await
    }

    /// Gets a workspace by name.
    ///
    /// # Errors
    ///
    /// * [`GeoServerError::NotFound`](crate::api::GeoServerError::NotFound) if it does not exist
    pub async fn get_workspace(&self, name: &str) -> Result<Workspace> {
        self.fetch(&workspace(name), StatusTable::READ).await
    }

    /// Creates a workspace.
    ///
    /// # Parameters
    ///
    /// * `workspace` - The workspace to create
    /// * `is_default` - Make it the default workspace
    pub async fn create_workspace(&self, workspace: &Workspace, is_default: bool) -> Result<()> {
        self.send_xml(
            Method::POST,
            &workspaces().flag("default", is_default),
            WORKSPACE_ROOT,
            workspace,
            StatusTable::CREATE,
        )
        .await
    }

    /// Replaces the workspace `name`; renaming is done by changing `workspace.name`.
    pub async fn update_workspace(&self, name: &str, workspace: &Workspace) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &self::workspace(name),
            WORKSPACE_ROOT,
            workspace,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a workspace.
    ///
    /// Without `recurse`, a workspace that still holds stores answers
    /// [`GeoServerError::NotEmpty`](crate::api::GeoServerError::NotEmpty).
    pub async fn delete_workspace(&self, name: &str, recurse: bool) -> Result<()> {
        self.remove(&workspace(name).flag("recurse", recurse), StatusTable::DELETE)
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

    const FOO: &str = r#"<workspace>
  <name>foo</name>
  <isolated>false</isolated>
  <dataStores>
    <atom:link xmlns:atom="http://www.w3.org/2005/Atom" rel="alternate" href="http://localhost:8080/geoserver/rest/workspaces/foo/datastores.xml" type="application/xml"/>
  </dataStores>
  <coverageStores>
    <atom:link xmlns:atom="http://www.w3.org/2005/Atom" rel="alternate" href="http://localhost:8080/geoserver/rest/workspaces/foo/coveragestores.xml" type="application/xml"/>
  </coverageStores>
  <wmsStores>
    <atom:link xmlns:atom="http://www.w3.org/2005/Atom" rel="alternate" href="http://localhost:8080/geoserver/rest/workspaces/foo/wmsstores.xml" type="application/xml"/>
  </wmsStores>
</workspace>"#;

    #[test]
    fn test_decode_workspace_links() {
        let ws: Workspace = codec::decode(FOO).unwrap();
        assert_eq!(ws.name, "foo");
        assert!(!ws.isolated);
        assert_eq!(
            ws.data_stores.unwrap().href(),
            Some("http://localhost:8080/geoserver/rest/workspaces/foo/datastores.xml")
        );
    }

    #[test]
    fn test_encode_skips_links() {
        let ws: Workspace = codec::decode(FOO).unwrap();
        let xml = codec::encode(WORKSPACE_ROOT, &ws).unwrap();
        assert_eq!(
            xml,
            "<workspace><name>foo</name><isolated>false</isolated></workspace>"
        );
    }

    #[tokio::test]
    async fn test_list_workspaces() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces")
            .with_status(200)
            .with_body("<workspaces><workspace><name>foo</name></workspace></workspaces>")
            .create_async()
            .await;
        server
            .mock("GET", "/workspaces/foo")
            .with_status(200)
            .with_body(FOO)
            .create_async()
            .await;

        let list = client(&server).list_workspaces().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "foo");
    }

    #[tokio::test]
    async fn test_create_workspace_default_flag() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces")
            .match_query(Matcher::UrlEncoded("default".into(), "true".into()))
            .match_header("authorization", ADMIN_AUTH)
            .match_header("content-type", "application/xml")
            .match_body("<workspace><name>bar</name><isolated>false</isolated></workspace>")
            .with_status(201)
            .create_async()
            .await;

        client(&server)
            .create_workspace(&Workspace::new("bar"), true)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_workspace_statuses() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/workspaces")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let result = client(&server)
            .create_workspace(&Workspace::new("bar"), false)
            .await;
        assert!(matches!(result, Err(GeoServerError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_get_workspace_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/missing")
            .with_status(404)
            .create_async()
            .await;

        let result = client(&server).get_workspace("missing").await;
        assert!(matches!(result, Err(GeoServerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_workspace_statuses() {
        for (status, expected) in [(200, "ok"), (404, "not found"), (405, "forbidden"), (500, "unknown")] {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("PUT", "/workspaces/foo")
                .with_status(status)
                .create_async()
                .await;

            let result = client(&server)
                .update_workspace("foo", &Workspace::new("foo2"))
                .await;
            let kind = match result {
                Ok(()) => "ok",
                Err(GeoServerError::NotFound(_)) => "not found",
                Err(GeoServerError::Forbidden(_)) => "forbidden",
                Err(GeoServerError::Unknown { .. }) => "unknown",
                Err(e) => panic!("unexpected {:?}", e),
            };
            assert_eq!(kind, expected, "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_delete_workspace_recurse() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/workspaces/foo")
            .match_query(Matcher::UrlEncoded("recurse".into(), "false".into()))
            .with_status(403)
            .create_async()
            .await;

        let result = client(&server).delete_workspace("foo", false).await;
        assert!(matches!(result, Err(GeoServerError::NotEmpty(_))));
        mock.assert_async().await;
    }
}
