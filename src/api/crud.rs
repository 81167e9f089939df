//
//  geoserver-client
//  api/crud.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Generic CRUD helpers shared by every resource family.
//!
//! Resource modules describe *where* a resource lives ([`Endpoint`]), *what*
//! it looks like (a serde struct) and *which statuses* mean what
//! ([`StatusTable`]). The helpers below do the rest: one HTTP call, status
//! classification, then XML decoding.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::{GeoServerClient, RawResponse};
use super::common::{codec, ResourceRef, Result, StatusTable};
use super::Endpoint;

impl GeoServerClient {
    /// Performs an XML request and classifies the status against `table`.
    pub(crate) async fn call(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<String>,
        table: StatusTable,
    ) -> Result<RawResponse> {
        let response = self.request(method, endpoint, body).await?;
        table.classify(response.status, &response.body, &endpoint.to_string())?;
        Ok(response)
    }

    /// GETs `endpoint` and decodes the body as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        table: StatusTable,
    ) -> Result<T> {
        let response = self.call(Method::GET, endpoint, None, table).await?;
        codec::decode(&response.body)
    }

    /// GETs a collection endpoint; a blank body decodes as `L::default()`.
    pub(crate) async fn fetch_collection<L: DeserializeOwned + Default>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<L> {
        let response = self
            .call(Method::GET, endpoint, None, StatusTable::LIST)
            .await?;
        codec::decode_or_default(&response.body)
    }

    /// Lists a collection and fetches every referenced item.
    ///
    /// Issues one GET for the collection and one GET per reference, in
    /// order. The first failing item aborts the listing; items fetched
    /// before it are dropped.
    ///
    /// # Parameters
    ///
    /// * `collection` - The collection endpoint
    /// * `refs` - Extracts the references from the decoded collection
    /// * `item` - Builds the item endpoint for a reference name
    pub(crate) async fn fetch_all<L, T, R, I>(
        &self,
        collection: &Endpoint,
        refs: R,
        item: I,
    ) -> Result<Vec<T>>
    where
        L: DeserializeOwned + Default,
        T: DeserializeOwned,
        R: FnOnce(L) -> Vec<ResourceRef>,
        I: Fn(&str) -> Endpoint,
    {
        let list: L = self.fetch_collection(collection).await?;
        let refs = refs(list);
        tracing::debug!("{} lists {} items", collection, refs.len());

        let mut items = Vec::with_capacity(refs.len());
        for r in refs {
            items.push(self.fetch(&item(&r.name), StatusTable::READ).await?);
        }
        Ok(items)
    }

    /// Serializes `value` under `<root>` and sends it with `method`.
    pub(crate) async fn send_xml<T: Serialize>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        root: &str,
        value: &T,
        table: StatusTable,
    ) -> Result<()> {
        let body = codec::encode(root, value)?;
        self.call(method, endpoint, Some(body), table).await?;
        Ok(())
    }

    /// DELETEs `endpoint`.
    pub(crate) async fn remove(&self, endpoint: &Endpoint, table: StatusTable) -> Result<()> {
        self.call(Method::DELETE, endpoint, None, table).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::GeoServerError;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Things {
        #[serde(rename = "thing", default)]
        things: Vec<ResourceRef>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Thing {
        name: String,
        size: u32,
    }

    fn things() -> Endpoint {
        Endpoint::new().push("things")
    }

    fn thing(name: &str) -> Endpoint {
        Endpoint::new().push("things").push(name)
    }

    #[tokio::test]
    async fn test_fetch_all_issues_one_request_per_item() {
        let mut server = mockito::Server::new_async().await;
        let list = server
            .mock("GET", "/things")
            .with_status(200)
            .with_body("<things><thing><name>a</name></thing><thing><name>b</name></thing></things>")
            .expect(1)
            .create_async()
            .await;
        let a = server
            .mock("GET", "/things/a")
            .with_status(200)
            .with_body("<thing><name>a</name><size>1</size></thing>")
            .expect(1)
            .create_async()
            .await;
        let b = server
            .mock("GET", "/things/b")
            .with_status(200)
            .with_body("<thing><name>b</name><size>2</size></thing>")
            .expect(1)
            .create_async()
            .await;

        let client = GeoServerClient::new(&server.url()).unwrap();
        let items: Vec<Thing> = client
            .fetch_all(&things(), |l: Things| l.things, thing)
            .await
            .unwrap();

        assert_eq!(
            items,
            vec![
                Thing { name: "a".into(), size: 1 },
                Thing { name: "b".into(), size: 2 },
            ]
        );
        list.assert_async().await;
        a.assert_async().await;
        b.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_all_stops_at_first_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/things")
            .with_status(200)
            .with_body(
                "<things><thing><name>a</name></thing><thing><name>b</name></thing><thing><name>c</name></thing></things>",
            )
            .create_async()
            .await;
        server
            .mock("GET", "/things/a")
            .with_status(200)
            .with_body("<thing><name>a</name><size>1</size></thing>")
            .create_async()
            .await;
        server
            .mock("GET", "/things/b")
            .with_status(404)
            .create_async()
            .await;
        let c = server
            .mock("GET", "/things/c")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let client = GeoServerClient::new(&server.url()).unwrap();
        let result: Result<Vec<Thing>> = client
            .fetch_all(&things(), |l: Things| l.things, thing)
            .await;

        match result {
            Err(GeoServerError::NotFound(what)) => assert_eq!(what, "/things/b"),
            other => panic!("unexpected {:?}", other),
        }
        c.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_all_blank_collection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/things")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let client = GeoServerClient::new(&server.url()).unwrap();
        let items: Vec<Thing> = client
            .fetch_all(&things(), |l: Things| l.things, thing)
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_status_carries_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/things/a")
            .with_status(500)
            .with_body("java.lang.NullPointerException")
            .create_async()
            .await;

        let client = GeoServerClient::new(&server.url()).unwrap();
        match client.remove(&thing("a"), StatusTable::DELETE).await {
            Err(GeoServerError::Unknown { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "java.lang.NullPointerException");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
