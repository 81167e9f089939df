//
//  geoserver-client
//  api/security/urlchecks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! URL checks: the allow-list GeoServer applies to outbound requests such
//! as remote SLDs and WMS cascading.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a regular-expression URL check.
pub const REGEX_URL_CHECK_ROOT: &str = "regexUrlCheck";

/// A URL check matching a regular expression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegexUrlCheck {
    /// Check name, also its URL segment.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Pattern matched against the full URL.
    pub regex: String,

    #[serde(default)]
    pub enabled: bool,
}

impl RegexUrlCheck {
    /// An enabled check.
    pub fn new(name: impl Into<String>, regex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            regex: regex.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct UrlCheckList {
    #[serde(rename = "urlCheck", default)]
    items: Vec<ResourceRef>,
}

fn url_checks() -> Endpoint {
    Endpoint::new().push("urlchecks")
}

fn url_check(name: &str) -> Endpoint {
    url_checks().push(name)
}

impl GeoServerClient {
    /// Lists every URL check with its definition.
    pub async fn list_url_checks(&self) -> Result<Vec<RegexUrlCheck>> {
        let list: UrlCheckList = self.fetch_collection(&url_checks()).await?;
        let mut checks = Vec::with_capacity(list.items.len());
        for r in list.items {
            checks.push(self.get_url_check(&r.name).await?);
        }
        Ok(checks)
    }

    /// Gets a URL check.
    pub async fn get_url_check(&self, name: &str) -> Result<RegexUrlCheck> {
        self.fetch(&url_check(name), StatusTable::URL_CHECK_READ)
            .await
    }

    /// Creates a URL check.
    pub async fn create_url_check(&self, check: &RegexUrlCheck) -> Result<()> {
        self.send_xml(
            Method::POST,
            &url_checks(),
            REGEX_URL_CHECK_ROOT,
            check,
            StatusTable::CREATE,
        )
        .await
    }

    /// Replaces the URL check `name`.
    pub async fn update_url_check(&self, name: &str, check: &RegexUrlCheck) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &url_check(name),
            REGEX_URL_CHECK_ROOT,
            check,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a URL check.
    pub async fn delete_url_check(&self, name: &str) -> Result<()> {
        self.remove(&url_check(name), StatusTable::URL_CHECK_DELETE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{codec, GeoServerError};
    use crate::api::test_support::client;

    #[tokio::test]
    async fn test_list_url_checks() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/urlchecks")
            .with_status(200)
            .with_body("<urlChecks><urlCheck><name>osm</name></urlCheck></urlChecks>")
            .create_async()
            .await;
        let item = server
            .mock("GET", "/urlchecks/osm")
            .with_status(200)
            .with_body(
                r#"<regexUrlCheck>
  <name>osm</name>
  <description>OpenStreetMap tiles</description>
  <enabled>true</enabled>
  <regex>^https://tile\.openstreetmap\.org/.*$</regex>
</regexUrlCheck>"#,
            )
            .expect(1)
            .create_async()
            .await;

        let checks = client(&server).list_url_checks().await.unwrap();
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].regex, r"^https://tile\.openstreetmap\.org/.*$");
        assert_eq!(checks[0].description.as_deref(), Some("OpenStreetMap tiles"));
        item.assert_async().await;
    }

    const ICONS: &str = r#"<regexUrlCheck>
    <name>icons</name>
    <description>External graphic icons</description>
    <enabled>true</enabled>
    <regex>^https://styles.server.net/icons/.*$</regex>
</regexUrlCheck>"#;

    #[test]
    fn test_url_check_round_trip() {
        let check: RegexUrlCheck = codec::decode(ICONS).unwrap();
        assert_eq!(
            check,
            RegexUrlCheck {
                description: Some("External graphic icons".to_string()),
                ..RegexUrlCheck::new("icons", "^https://styles.server.net/icons/.*$")
            }
        );
        let xml = codec::encode(REGEX_URL_CHECK_ROOT, &check).unwrap();
        assert_eq!(
            xml,
            "<regexUrlCheck><name>icons</name><description>External graphic icons</description><regex>^https://styles.server.net/icons/.*$</regex><enabled>true</enabled></regexUrlCheck>"
        );
        assert_eq!(codec::decode::<RegexUrlCheck>(&xml).unwrap(), check);
    }

    #[tokio::test]
    async fn test_get_url_check_has_no_unauthorized_branch() {
        for (status, expected) in [
            (200, "ok"),
            (404, "not found"),
            (401, "unknown"),
            (500, "unknown"),
        ] {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("GET", "/urlchecks/icons")
                .with_status(status)
                .with_body(ICONS)
                .create_async()
                .await;

            let kind = match client(&server).get_url_check("icons").await {
                Ok(check) => {
                    assert_eq!(check.name, "icons");
                    "ok"
                }
                Err(GeoServerError::NotFound(_)) => "not found",
                Err(GeoServerError::Unknown { .. }) => "unknown",
                Err(e) => panic!("unexpected {:?}", e),
            };
            assert_eq!(kind, expected, "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_update_url_check_uses_regex_root() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/urlchecks/osm")
            .match_body("<regexUrlCheck><name>osm</name><regex>^https://.*$</regex><enabled>true</enabled></regexUrlCheck>")
            .with_status(200)
            .create_async()
            .await;

        client(&server)
            .update_url_check("osm", &RegexUrlCheck::new("osm", "^https://.*$"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_and_delete_url_check() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/urlchecks")
            .with_status(201)
            .create_async()
            .await;
        server
            .mock("DELETE", "/urlchecks/osm")
            .with_status(405)
            .create_async()
            .await;

        let c = client(&server);
        c.create_url_check(&RegexUrlCheck::new("osm", ".*"))
            .await
            .unwrap();
        create.assert_async().await;
        assert!(matches!(
            c.delete_url_check("osm").await,
            Err(GeoServerError::Forbidden(_))
        ));
    }
}
