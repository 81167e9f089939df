//
//  geoserver-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! GeoServer's REST API is protected by HTTP Basic authentication. This
//! module holds the credential type the client attaches to every request.
//!
//! ## Example
//!
//! ```rust
//! use geoserver_client::auth::Credentials;
//!
//! let credentials = Credentials::basic("admin", "geoserver");
//! assert!(credentials.is_complete());
//!
//! // An empty password disables authentication altogether
//! assert!(!Credentials::basic("admin", "").is_complete());
//! ```

use std::fmt;

use reqwest::RequestBuilder;

/// Username and password for HTTP Basic authentication.
///
/// The password never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The GeoServer username.
    pub username: String,
    /// The GeoServer password.
    pub password: String,
}

impl Credentials {
    /// Creates Basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns `true` when both username and password are set.
    ///
    /// Incomplete credentials are not sent; the request goes out anonymously.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Applies the credentials to an HTTP request.
    ///
    /// # Parameters
    ///
    /// - `request`: The [`RequestBuilder`] to add the `Authorization` header to.
    ///
    /// # Returns
    ///
    /// The request with Basic auth applied, or unchanged when the credentials
    /// are incomplete.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        if self.is_complete() {
            request.basic_auth(&self.username, Some(&self.password))
        } else {
            request
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
