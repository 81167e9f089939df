//
//  geoserver-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client and the resource families of the
//! GeoServer REST administrative API.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP transport with Basic authentication
//! - [`common`]: Shared types (errors, status tables, XML fragments)
//! - [`catalog`]: Workspaces, stores, feature types, layers, layer groups, styles, resources
//! - [`services`]: OWS service settings
//! - [`gwc`]: GeoWebCache gridsets, blobstores, disk quota and cached layers
//! - [`security`]: Layer ACL rules, users and URL checks
//!
//! Every resource operation is a method on [`GeoServerClient`], declared in
//! the module of the resource it manages.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::api::catalog::Workspace;
//!
//! # async fn run() -> geoserver_client::api::common::Result<()> {
//! let client = GeoServerClient::new("http://localhost:8080/geoserver/rest")?
//!     .with_credentials("admin", "geoserver");
//!
//! client.create_workspace(&Workspace::new("foo"), false).await?;
//! for store in client.list_datastores("foo").await? {
//!     println!("{}", store.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`GeoServerError`] variants mapped from HTTP statuses:
//!
//! - `Unauthorized`: 401
//! - `NotEmpty`: 403 on deletes
//! - `NotFound`: 404
//! - `Forbidden`: 405
//! - `Unknown`: anything else, with status and body

/// Core HTTP transport.
pub mod client;

/// Shared types, error enum and status tables.
pub mod common;

mod crud;
mod endpoint;

/// Catalog resources: workspaces, datastores, feature types, layers, layer
/// groups, styles, cascaded WMS/WMTS stores and layers, and the resource
/// store.
pub mod catalog;

/// GeoWebCache resources: gridsets, blobstores, disk quota and cached layers.
pub mod gwc;

/// Security resources: layer ACL rules, users and URL checks.
pub mod security;

/// OWS service settings.
pub mod services;

pub use client::{GeoServerClient, RawResponse};
pub use common::{GeoServerError, Result};
pub use endpoint::Endpoint;
