//
//  geoserver-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # geoserver-client
//!
//! A typed, async client for the GeoServer REST administrative API.
//!
//! Each GeoServer entity (workspace, datastore, style, gridset, ACL rule,
//! ...) is a struct mirroring the server's XML representation, managed
//! through list/get/create/update/delete methods on
//! [`GeoServerClient`](api::GeoServerClient).
//!
//! ## Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//!
//! # async fn run() -> geoserver_client::api::Result<()> {
//! geoserver_client::init_logging();
//!
//! let client = GeoServerClient::new("http://localhost:8080/geoserver/rest")?
//!     .with_credentials("admin", "geoserver");
//!
//! let styles = client.list_styles(None).await?;
//! println!("{} global styles", styles.len());
//! # Ok(())
//! # }
//! ```

/// GeoServer REST API client and resource families.
///
/// The client handles authentication, endpoint building, XML encoding and
/// status classification.
pub mod api;

/// HTTP Basic credentials.
pub mod auth;

/// Connection profile configuration.
///
/// Profiles are stored in platform-specific locations:
/// - Linux: `~/.config/geoserver/config.toml`
/// - macOS: `~/Library/Application Support/geoserver/config.toml`
/// - Windows: `%APPDATA%\geoserver\config.toml`
pub mod config;

mod logging;

pub use config::Config;
pub use logging::init_logging;

/// Library version, taken from Cargo.toml at compile time.
///
/// Sent in the `User-Agent` header as `geoserver-client/<VERSION>`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
