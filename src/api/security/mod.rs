//
//  geoserver-client
//  api/security/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Security REST operations.
//!
//! - [`acl`] - Layer access rules (`/security/acl/layers`)
//! - [`users`] - Users of a user/group service (`/usergroup`)
//! - [`urlchecks`] - Outbound URL allow-list (`/urlchecks`)
//!
//! These endpoints predate the catalog conventions: some return full
//! records from the collection and some create with POST to the item.

pub mod acl;
pub mod urlchecks;
pub mod users;

pub use acl::*;
pub use urlchecks::*;
pub use users::*;
