//
//  geoserver-client
//  api/catalog/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Catalog resources.
//!
//! # Catalog Hierarchy
//!
//! ```text
//! Workspace
//! ├── DataStore
//! │   └── FeatureType ── Layer
//! ├── WMSStore / WMTSStore
//! │   └── WMSLayer / WMTSLayer ── Layer
//! ├── LayerGroup (optional scope)
//! └── Style (optional scope)
//! ```
//!
//! Layers, layer groups and styles also exist outside any workspace; their
//! operations take an `Option<&str>` workspace to pick the scope.

pub mod cascaded;
pub mod datastores;
pub mod featuretypes;
pub mod layergroups;
pub mod layers;
pub mod resources;
pub mod styles;
pub mod workspaces;

pub use cascaded::*;
pub use datastores::*;
pub use featuretypes::*;
pub use layergroups::*;
pub use layers::*;
pub use styles::*;
pub use workspaces::*;
