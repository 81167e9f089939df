//
//  geoserver-client
//  api/common/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Status-code classification for GeoServer REST responses.
//!
//! Every operation declares which HTTP statuses it understands and what each
//! one means. Anything not listed becomes [`GeoServerError::Unknown`] with the
//! status and raw body attached.
//!
//! # Standard Tables
//!
//! | Table | 200 | 201 | 401 | 403 | 404 | 405 |
//! |-------|-----|-----|-----|-----|-----|-----|
//! | [`StatusTable::LIST`] | ok | | unauthorized | | | |
//! | [`StatusTable::READ`] | ok | | unauthorized | | not found | |
//! | [`StatusTable::CREATE`] | | ok | unauthorized | | | |
//! | [`StatusTable::UPDATE`] | ok | | unauthorized | | not found | forbidden |
//! | [`StatusTable::DELETE`] | ok | | unauthorized | not empty | not found | forbidden |
//!
//! # Example
//!
//! ```rust
//! use geoserver_client::api::common::{GeoServerError, StatusTable};
//!
//! assert!(StatusTable::READ.classify(200, "", "/workspaces/foo").is_ok());
//! assert!(matches!(
//!     StatusTable::READ.classify(404, "", "/workspaces/foo"),
//!     Err(GeoServerError::NotFound(_))
//! ));
//! ```

use super::GeoServerError;

/// What a given status code means for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded.
    Success,
    /// Credentials missing or rejected.
    Unauthorized,
    /// The target does not exist.
    NotFound,
    /// The operation is not allowed on the target.
    Forbidden,
    /// The target still has children.
    NotEmpty,
}

/// A status-code to [`Outcome`] mapping.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable(&'static [(u16, Outcome)]);

impl StatusTable {
    /// Collection reads.
    pub const LIST: Self = Self(&[(401, Outcome::Unauthorized), (200, Outcome::Success)]);

    /// Single-item reads.
    pub const READ: Self = Self(&[
        (401, Outcome::Unauthorized),
        (404, Outcome::NotFound),
        (200, Outcome::Success),
    ]);

    /// Creation by POST to a collection.
    pub const CREATE: Self = Self(&[(401, Outcome::Unauthorized), (201, Outcome::Success)]);

    /// Creation by PUT to the item endpoint (GeoWebCache resources).
    pub const PUT_CREATE: Self = Self(&[
        (401, Outcome::Unauthorized),
        (200, Outcome::Success),
        (201, Outcome::Success),
    ]);

    /// Updates by PUT to the item endpoint.
    pub const UPDATE: Self = Self(&[
        (401, Outcome::Unauthorized),
        (404, Outcome::NotFound),
        (405, Outcome::Forbidden),
        (200, Outcome::Success),
    ]);

    /// Deletes.
    pub const DELETE: Self = Self(&[
        (401, Outcome::Unauthorized),
        (403, Outcome::NotEmpty),
        (404, Outcome::NotFound),
        (405, Outcome::Forbidden),
        (200, Outcome::Success),
    ]);

    /// GeoWebCache layer reads, which may answer 201.
    pub const GWC_READ: Self = Self(&[
        (401, Outcome::Unauthorized),
        (404, Outcome::NotFound),
        (200, Outcome::Success),
        (201, Outcome::Success),
    ]);

    /// Reads that only know success.
    pub const READ_ONLY_OK: Self = Self(&[(200, Outcome::Success)]);

    /// Service settings updates; GeoServer versions differ between 200 and 201.
    pub const SERVICE_UPDATE: Self = Self(&[
        (401, Outcome::Unauthorized),
        (404, Outcome::NotFound),
        (405, Outcome::Forbidden),
        (200, Outcome::Success),
        (201, Outcome::Success),
    ]);

    /// ACL rule creation.
    pub const ACL_CREATE: Self = Self(&[(401, Outcome::Unauthorized), (200, Outcome::Success)]);

    /// ACL rule updates; an unknown rule answers 409.
    pub const ACL_UPDATE: Self = Self(&[
        (401, Outcome::Unauthorized),
        (409, Outcome::NotFound),
        (405, Outcome::Forbidden),
        (200, Outcome::Success),
    ]);

    /// Style body updates.
    pub const BODY_UPDATE: Self = Self(&[(401, Outcome::Unauthorized), (200, Outcome::Success)]);

    /// URL check reads; the endpoint has no 401 branch.
    pub const URL_CHECK_READ: Self = Self(&[(404, Outcome::NotFound), (200, Outcome::Success)]);

    /// URL check deletes.
    pub const URL_CHECK_DELETE: Self = Self(&[
        (401, Outcome::Unauthorized),
        (404, Outcome::NotFound),
        (405, Outcome::Forbidden),
        (200, Outcome::Success),
    ]);

    /// Resource store reads.
    pub const RESOURCE_READ: Self = Self(&[(404, Outcome::NotFound), (200, Outcome::Success)]);

    /// Resource store writes.
    pub const RESOURCE_WRITE: Self = Self(&[
        (404, Outcome::NotFound),
        (405, Outcome::Forbidden),
        (200, Outcome::Success),
        (201, Outcome::Success),
    ]);

    /// Looks up the outcome for `status`.
    pub fn outcome(&self, status: u16) -> Option<Outcome> {
        self.0
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, outcome)| *outcome)
    }

    /// Maps `status` to `Ok(())` or the matching error.
    ///
    /// # Parameters
    ///
    /// * `status` - HTTP status returned by GeoServer
    /// * `body` - Raw response body, kept in `Unknown` errors
    /// * `context` - Endpoint or resource description for the error message
    pub fn classify(&self, status: u16, body: &str, context: &str) -> Result<(), GeoServerError> {
        match self.outcome(status) {
            Some(Outcome::Success) => Ok(()),
            Some(Outcome::Unauthorized) => Err(GeoServerError::Unauthorized),
            Some(Outcome::NotFound) => Err(GeoServerError::NotFound(context.to_string())),
            Some(Outcome::Forbidden) => Err(GeoServerError::Forbidden(context.to_string())),
            Some(Outcome::NotEmpty) => Err(GeoServerError::NotEmpty(context.to_string())),
            None => {
                tracing::warn!("Unexpected status {} from {}", status, context);
                Err(GeoServerError::Unknown {
                    status,
                    body: body.to_string(),
                })
            }
        }
    }
}
