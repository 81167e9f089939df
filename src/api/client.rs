//
//  geoserver-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the GeoServer REST API
//!
//! This module provides the core HTTP client every resource operation goes
//! through. It performs exactly one request per call and hands back the raw
//! status and body; mapping statuses to errors is left to the caller's
//! [`StatusTable`](crate::api::common::StatusTable).
//!
//! ## Features
//!
//! - Base URL validation
//! - HTTP Basic authentication when credentials are complete
//! - Explicit `Content-Type` / `Accept` control for non-XML bodies
//! - Custom User-Agent header

use reqwest::{Client, Method};
use url::Url;

use crate::api::common::{GeoServerError, Result};
use crate::api::Endpoint;
use crate::auth::Credentials;
use crate::config::ConnectionProfile;

/// MIME type used for every XML representation.
pub const APPLICATION_XML: &str = "application/xml";

/// Status and body of a completed HTTP exchange.
///
/// Produced for every response, successful or not. Only transport failures
/// (no response at all) become errors at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// The HTTP client for a GeoServer instance.
///
/// Holds the base URL (e.g. `http://localhost:8080/geoserver/rest`), optional
/// credentials and the underlying `reqwest` client. Cloning is cheap; clones
/// share the connection pool.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use geoserver_client::api::GeoServerClient;
///
/// let client = GeoServerClient::new("http://localhost:8080/geoserver/rest")?
///     .with_credentials("admin", "geoserver");
/// # Ok::<(), geoserver_client::api::GeoServerError>(())
/// ```
///
/// # GeoWebCache
///
/// GeoWebCache resources (gridsets, blobstores, disk quota, cached layers)
/// live under a separate root, usually `.../geoserver/gwc/rest`. Build a
/// second client for them, or use [`GeoServerClient::gwc_from_profile`].
#[derive(Debug, Clone)]
pub struct GeoServerClient {
    /// The underlying HTTP client
    http: Client,
    /// The REST root every endpoint is resolved against
    base_url: Url,
    /// Optional Basic credentials
    credentials: Option<Credentials>,
}

impl GeoServerClient {
    /// Creates a client for the REST root at `url`.
    ///
    /// # Parameters
    ///
    /// * `url` - The REST root, e.g. `http://localhost:8080/geoserver/rest`
    ///
    /// # Errors
    ///
    /// Returns [`GeoServerError::InvalidUrl`] if `url` is not an absolute
    /// http(s) URL, or [`GeoServerError::Network`] if the HTTP client could
    /// not be built.
    pub fn new(url: &str) -> Result<Self> {
        let base_url =
            Url::parse(url).map_err(|e| GeoServerError::InvalidUrl(format!("{}: {}", url, e)))?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(GeoServerError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                url
            )));
        }

        Ok(Self {
            http: Client::builder()
                .user_agent(format!("geoserver-client/{}", crate::VERSION))
                .build()?,
            base_url,
            credentials: None,
        })
    }

    /// Creates a catalog client from a connection profile.
    ///
    /// Credentials are attached when the profile carries both a username and
    /// a password.
    pub fn from_profile(profile: &ConnectionProfile) -> Result<Self> {
        Ok(Self::new(&profile.url)?.with_profile_credentials(profile))
    }

    /// Creates a GeoWebCache client from a connection profile.
    ///
    /// Uses `gwc_url` when set, otherwise derives it from the catalog URL
    /// (see [`ConnectionProfile::gwc_base_url`]).
    pub fn gwc_from_profile(profile: &ConnectionProfile) -> Result<Self> {
        let url = profile.gwc_base_url().ok_or_else(|| {
            GeoServerError::InvalidUrl(format!(
                "cannot derive a GeoWebCache URL from {}",
                profile.url
            ))
        })?;
        Ok(Self::new(&url)?.with_profile_credentials(profile))
    }

    fn with_profile_credentials(self, profile: &ConnectionProfile) -> Self {
        match (&profile.username, &profile.password) {
            (Some(user), Some(pass)) => self.with_credentials(user.as_str(), pass.as_str()),
            _ => self,
        }
    }

    /// Sets Basic credentials for this client.
    ///
    /// Credentials are only sent when both parts are non-empty.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::basic(username, password));
        self
    }

    /// Replaces the underlying HTTP client.
    ///
    /// Use this to configure timeouts, proxies or TLS roots; the crate itself
    /// applies none.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Returns the REST root this client resolves endpoints against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Performs a request with XML `Content-Type` and `Accept` headers.
    ///
    /// # Parameters
    ///
    /// * `method` - The HTTP method
    /// * `endpoint` - Path relative to the base URL
    /// * `body` - Optional request body
    ///
    /// # Errors
    ///
    /// Only transport failures are errors here; every HTTP status, including
    /// 4xx and 5xx, comes back as a [`RawResponse`].
    pub async fn request(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<String>,
    ) -> Result<RawResponse> {
        self.fully_typed_request(method, endpoint, body, APPLICATION_XML, APPLICATION_XML)
            .await
    }

    /// Performs a request with both `Content-Type` and `Accept` set to `mime`.
    ///
    /// Used to read and write style bodies, whose MIME type depends on the
    /// style format.
    pub async fn typed_request(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<String>,
        mime: &str,
    ) -> Result<RawResponse> {
        self.fully_typed_request(method, endpoint, body, mime, mime)
            .await
    }

    /// Performs a request with explicit `Content-Type` and `Accept` headers.
    ///
    /// An empty `content_type` leaves that header unset. An empty `accept`
    /// falls back to the HTTP client default (`*/*` for reqwest).
    pub async fn fully_typed_request(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<String>,
        content_type: &str,
        accept: &str,
    ) -> Result<RawResponse> {
        let url = endpoint.resolve(&self.base_url)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), url.clone());

        if !content_type.is_empty() {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if !accept.is_empty() {
            request = request.header(reqwest::header::ACCEPT, accept);
        }
        if let Some(credentials) = &self.credentials {
            request = credentials.apply_to_request(request);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!("{} {} -> {}", method, url, status);

        Ok(RawResponse { status, body })
    }
}
