//
//  geoserver-client
//  api/services/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! OWS service settings.
//!
//! Each service has global settings under `/services/{service}/settings`
//! and optional per-workspace overrides under
//! `/services/{service}/workspaces/{ws}/settings`.

pub mod wms;

pub use wms::*;
