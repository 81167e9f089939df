//
//  geoserver-client
//  api/security/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User management.
//!
//! Users belong to a user/group service. Every operation takes an optional
//! service name; `None` targets the default service.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::APPLICATION_XML;
use crate::api::common::{codec, GeoServerError, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a user document.
pub const USER_ROOT: &str = "user";

/// A GeoServer user.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userName")]
    pub name: String,

    /// Only sent on create and update; GeoServer never returns it.
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub enabled: bool,
}

impl User {
    /// An enabled user.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            enabled: true,
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct UserList {
    #[serde(rename = "user", default)]
    users: Vec<User>,
}

/// `/usergroup` or `/usergroup/service/{service}`.
fn usergroup(service: Option<&str>) -> Endpoint {
    let base = Endpoint::new().push("usergroup");
    match service {
        Some(s) => base.push("service").push(s),
        None => base,
    }
}

fn users(service: Option<&str>) -> Endpoint {
    usergroup(service).push("users")
}

fn user(service: Option<&str>, name: &str) -> Endpoint {
    usergroup(service).push("user").push(name)
}

impl GeoServerClient {
    /// Lists the users of a service, in full.
    pub async fn list_users(&self, service: Option<&str>) -> Result<Vec<User>> {
        let list: UserList = self.fetch_collection(&users(service)).await?;
        Ok(list.users)
    }

    /// Finds a user by name in the service's user list.
    pub async fn get_user(&self, service: Option<&str>, name: &str) -> Result<User> {
        self.list_users(service)
            .await?
            .into_iter()
            .find(|u| u.name == name)
            .ok_or_else(|| GeoServerError::NotFound(format!("user {}", name)))
    }

    /// Creates a user.
    pub async fn create_user(&self, service: Option<&str>, new_user: &User) -> Result<()> {
        self.post_user(&users(service), new_user, StatusTable::CREATE)
            .await
    }

    /// Updates the user `name`. GeoServer takes a POST to the item endpoint.
    pub async fn update_user(&self, service: Option<&str>, name: &str, changes: &User) -> Result<()> {
        self.post_user(&user(service, name), changes, StatusTable::UPDATE)
            .await
    }

    async fn post_user(&self, endpoint: &Endpoint, value: &User, table: StatusTable) -> Result<()> {
        let body = codec::encode(USER_ROOT, value)?;
        let response = self
            .fully_typed_request(Method::POST, endpoint, Some(body), APPLICATION_XML, "")
            .await?;
        table.classify(response.status, &response.body, &endpoint.to_string())
    }

    pub async fn delete_user(&self, service: Option<&str>, name: &str) -> Result<()> {
        self.remove(&user(service, name), StatusTable::DELETE).await
    }
}
