//
//  geoserver-client
//  api/security/acl.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Layer ACL rules.
//!
//! A rule maps a resource pattern `workspace.layer.mode` (mode is `r`, `w`
//! or `a`) to a comma-separated list of roles. The collection endpoint
//! returns every rule in full, so there is no per-item fetch.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::security::LayerRule;
//! use geoserver_client::api::GeoServerClient;
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! client
//!     .create_layer_rule(&LayerRule::new("topp.*.r", "ROLE_AUTHENTICATED"))
//!     .await?;
//! let rule = client.get_layer_rule("topp.*.r").await?;
//! assert_eq!(rule.roles, "ROLE_AUTHENTICATED");
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::APPLICATION_XML;
use crate::api::common::{codec, GeoServerError, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element wrapping rules in both directions.
pub const LAYER_RULES_ROOT: &str = "rules";

/// One `<rule resource="...">ROLES</rule>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerRule {
    /// Resource pattern, e.g. `topp.states.w`.
    #[serde(rename = "@resource")]
    pub resource: String,

    /// Comma-separated role names.
    #[serde(rename = "$text", default)]
    pub roles: String,
}

impl LayerRule {
    pub fn new(resource: impl Into<String>, roles: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            roles: roles.into(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LayerRules {
    #[serde(rename = "rule", default)]
    rules: Vec<LayerRule>,
}

fn layer_rules() -> Endpoint {
    Endpoint::new().push("security").push("acl").push("layers")
}

impl GeoServerClient {
    /// Lists every layer rule.
    pub async fn list_layer_rules(&self) -> Result<Vec<LayerRule>> {
        let list: LayerRules = self.fetch_collection(&layer_rules()).await?;
        Ok(list.rules)
    }

    /// Finds the rule for `resource` in the full list.
    pub async fn get_layer_rule(&self, resource: &str) -> Result<LayerRule> {
        self.list_layer_rules()
            .await?
            .into_iter()
            .find(|r| r.resource == resource)
            .ok_or_else(|| GeoServerError::NotFound(format!("layer rule {}", resource)))
    }

    /// Adds a rule. GeoServer answers 200 rather than 201.
    pub async fn create_layer_rule(&self, rule: &LayerRule) -> Result<()> {
        self.send_layer_rule(Method::POST, rule, StatusTable::ACL_CREATE)
            .await
    }

    /// Replaces the roles of an existing rule; an unknown rule is `NotFound`.
    pub async fn update_layer_rule(&self, rule: &LayerRule) -> Result<()> {
        self.send_layer_rule(Method::PUT, rule, StatusTable::ACL_UPDATE)
            .await
    }

    async fn send_layer_rule(
        &self,
        method: Method,
        rule: &LayerRule,
        table: StatusTable,
    ) -> Result<()> {
        let endpoint = layer_rules();
        let body = codec::encode(
            LAYER_RULES_ROOT,
            &LayerRules {
                rules: vec![rule.clone()],
            },
        )?;
        let response = self
            .fully_typed_request(method, &endpoint, Some(body), APPLICATION_XML, "")
            .await?;
        table.classify(response.status, &response.body, &endpoint.to_string())
    }

    /// Deletes the rule for `resource`.
    pub async fn delete_layer_rule(&self, resource: &str) -> Result<()> {
        self.remove(&layer_rules().push(resource), StatusTable::DELETE)
            .await
    }
}
