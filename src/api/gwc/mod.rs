//
//  geoserver-client
//  api/gwc/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GeoWebCache REST operations.
//!
//! GeoWebCache lives under its own root (`/geoserver/gwc/rest`), so these
//! operations are called on a client built for that URL, typically through
//! [`GeoServerClient::gwc_from_profile`](crate::api::GeoServerClient::gwc_from_profile).
//!
//! Unlike the catalog, GeoWebCache creates resources with a PUT to the item
//! endpoint and answers either 200 or 201.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::config::ConnectionProfile;
//!
//! # async fn run() -> geoserver_client::api::Result<()> {
//! let profile = ConnectionProfile::new("http://localhost:8080/geoserver/rest");
//! let gwc = GeoServerClient::gwc_from_profile(&profile)?;
//! for gridset in gwc.list_gridsets().await? {
//!     println!("{} ({}x{})", gridset.name, gridset.tile_width, gridset.tile_height);
//! }
//! # Ok(())
//! # }
//! ```

pub mod blobstores;
pub mod diskquota;
pub mod gridsets;
pub mod layers;

pub use blobstores::*;
pub use diskquota::*;
pub use gridsets::*;
pub use layers::*;
