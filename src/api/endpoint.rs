//
//  geoserver-client
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint builder for GeoServer REST paths.
//!
//! An [`Endpoint`] is a list of path segments plus query pairs. It is joined
//! onto the client's base URL with per-segment percent-encoding, so resource
//! names containing spaces or reserved characters are safe to pass through.
//!
//! # Example
//!
//! ```rust
//! use geoserver_client::api::Endpoint;
//!
//! let endpoint = Endpoint::new()
//!     .push("workspaces")
//!     .push("foo")
//!     .flag("recurse", true);
//! assert_eq!(endpoint.to_string(), "/workspaces/foo?recurse=true");
//! ```

use std::fmt;

use url::Url;

use super::common::{GeoServerError, Result};

/// A REST path relative to the client's base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Creates an empty endpoint (the base URL itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts at `/workspaces/{workspace}` when a workspace is given, at the
    /// root otherwise.
    ///
    /// Styles, layers and layer groups exist both globally and per workspace.
    pub fn scoped(workspace: Option<&str>) -> Self {
        match workspace {
            Some(ws) => Self::new().push("workspaces").push(ws),
            None => Self::new(),
        }
    }

    /// Appends one path segment.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a segment only when `segment` is `Some`.
    pub fn push_opt(self, segment: Option<&str>) -> Self {
        match segment {
            Some(s) => self.push(s),
            None => self,
        }
    }

    /// Adds a query pair.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a boolean query flag, encoded as `true` / `false`.
    pub fn flag(self, key: impl Into<String>, value: bool) -> Self {
        self.query(key, value.to_string())
    }

    /// Path segments, unencoded.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Joins this endpoint onto `base`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoServerError::InvalidUrl`] if `base` cannot carry a path
    /// (e.g. a `data:` URL).
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| GeoServerError::InvalidUrl(base.to_string()))?;
            path.pop_if_empty();
            path.extend(self.segments.iter().map(String::as_str));
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, k, v)?;
        }
        Ok(())
    }
}
