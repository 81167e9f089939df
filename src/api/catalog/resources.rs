//
//  geoserver-client
//  api/catalog/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource store operations.
//!
//! The resource store exposes files of the GeoServer data directory under
//! `/resource/{path}`. Contents are raw text, not XML documents, so these
//! operations bypass the XML codec.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! client
//!     .create_resource("workspaces/topp/styles/legend", "svg", "<svg/>")
//!     .await?;
//! let svg = client.get_resource("workspaces/topp/styles/legend", "svg").await?;
//! client.delete_resource("workspaces/topp/styles/legend.svg").await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;

use crate::api::common::{GeoServerError, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Splits a data directory path into endpoint segments under `/resource`.
fn resource(path: &str) -> Endpoint {
    path.split('/')
        .filter(|s| !s.is_empty())
        .fold(Endpoint::new().push("resource"), |e, s| e.push(s))
}

/// `/resource/{path}.{extension}`, for operations that only apply to files.
fn resource_file(path: &str, extension: &str) -> Result<Endpoint> {
    if extension.is_empty() {
        return Err(GeoServerError::InvalidArgument(
            "resource operations with content need a file extension".to_string(),
        ));
    }
    Ok(resource(&format!("{}.{}", path, extension)))
}

impl GeoServerClient {
    /// Reads a file from the data directory.
    ///
    /// # Parameters
    ///
    /// * `path` - Path without extension, e.g. `styles/legend`
    /// * `extension` - File extension, e.g. `svg`; must not be empty
    pub async fn get_resource(&self, path: &str, extension: &str) -> Result<String> {
        let endpoint = resource_file(path, extension)?;
        let response = self
            .call(Method::GET, &endpoint, None, StatusTable::RESOURCE_READ)
            .await?;
        Ok(response.body)
    }

    /// Writes a new file to the data directory.
    pub async fn create_resource(&self, path: &str, extension: &str, content: &str) -> Result<()> {
        self.put_resource(path, extension, content).await
    }

    /// Overwrites a file in the data directory.
    pub async fn update_resource(&self, path: &str, extension: &str, content: &str) -> Result<()> {
        self.put_resource(path, extension, content).await
    }

    async fn put_resource(&self, path: &str, extension: &str, content: &str) -> Result<()> {
        let endpoint = resource_file(path, extension)?;
        if content.is_empty() {
            return Err(GeoServerError::InvalidArgument(
                "resource content must not be empty".to_string(),
            ));
        }
        self.call(
            Method::PUT,
            &endpoint,
            Some(content.to_string()),
            StatusTable::RESOURCE_WRITE,
        )
        .await?;
        Ok(())
    }

    /// Deletes a file or directory; `path` includes the extension, if any.
    pub async fn delete_resource(&self, path: &str) -> Result<()> {
        self.remove(&resource(path), StatusTable::DELETE).await
    }
}
