//
//  geoserver-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for every GeoServer resource family
//!
//! This module provides the shared building blocks used by the catalog,
//! GeoWebCache, security and service modules: the error type, the
//! status-code tables, the XML codec and the small reference structs that
//! GeoServer embeds inside almost every representation.
//!
//! # Overview
//!
//! - [`GeoServerError`] - Unified error type for all API operations
//! - [`ResourceRef`] - An entry of a collection response (name + link)
//! - [`NamedRef`] - A `<name>` wrapper used for workspace/style/store references
//! - [`MetadataEntry`], [`DimensionInfo`], [`Keywords`], [`Crs`], [`BoundingBox`] - Recurring XML fragments
//! - Status tables (re-exported from the [`status`] submodule)
//!
//! # Example
//!
//! ```rust
//! use geoserver_client::api::common::GeoServerError;
//!
//! fn handle_result<T>(result: Result<T, GeoServerError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(GeoServerError::Unauthorized) => println!("Check your credentials"),
//!         Err(GeoServerError::NotFound(what)) => println!("Not found: {}", what),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) mod codec;
mod status;

pub use status::*;

/// Unified error type for all GeoServer API operations.
///
/// Every operation funnels its HTTP status through a [`StatusTable`], which
/// yields one of the variants below. Transport failures are kept apart from
/// HTTP-level outcomes so callers can tell "the server said no" from "the
/// server was never reached".
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `Unauthorized` | Missing or rejected credentials | 401 |
/// | `NotFound` | Resource does not exist | 404 (409 for ACL updates) |
/// | `Forbidden` | Operation not allowed on this resource | 405 |
/// | `NotEmpty` | Container still holds children | 403 |
/// | `Unknown` | Any status the table does not list | other |
/// | `InvalidArgument` | Rejected before any request was made | N/A |
/// | `InvalidUrl` | Base URL or endpoint could not be built | N/A |
/// | `Network` | Connection, DNS or body read failure | N/A |
/// | `Decode` / `Encode` | XML (de)serialization failure | N/A |
///
/// # Example
///
/// ```rust
/// use geoserver_client::api::common::GeoServerError;
///
/// let err = GeoServerError::Unknown { status: 500, body: "boom".to_string() };
/// assert_eq!(err.to_string(), "Unknown error: 500 - boom");
/// assert_eq!(err.status(), Some(500));
/// ```
#[derive(Error, Debug)]
pub enum GeoServerError {
    /// The server rejected the request credentials (HTTP 401).
    #[error("Unauthorized")]
    Unauthorized,

    /// The requested resource does not exist.
    ///
    /// # Parameters
    ///
    /// - `0` - The endpoint or resource description that was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server refused the operation on this resource (HTTP 405).
    ///
    /// # Parameters
    ///
    /// - `0` - The endpoint the operation was attempted on
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The resource still contains children and cannot be removed (HTTP 403).
    ///
    /// Workspaces, stores and user services answer 403 on delete when
    /// `recurse` is not set and something still lives inside them.
    #[error("Not empty: {0}")]
    NotEmpty(String),

    /// A status code the operation does not expect.
    ///
    /// Carries the raw status and response body for diagnostics.
    #[error("Unknown error: {status} - {body}")]
    Unknown {
        /// HTTP status code returned by GeoServer
        status: u16,
        /// Raw response body
        body: String,
    },

    /// An argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The base URL is malformed or cannot carry path segments.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not the XML document the operation expects.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A value could not be serialized to XML.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl GeoServerError {
    /// Returns the HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NotFound(_) => Some(404),
            Self::Forbidden(_) => Some(405),
            Self::NotEmpty(_) => Some(403),
            Self::Unknown { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for [`GeoServerError::NotFound`].
    ///
    /// Convenient for "create if missing" flows.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for GeoServer operations.
pub type Result<T> = std::result::Result<T, GeoServerError>;

/// Hyperlink attached to collection entries and read-only sub-resources.
///
/// GeoServer emits these as `<atom:link rel="alternate" href="..."/>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AtomLink {
    /// The URL of the linked resource.
    #[serde(rename = "@href", default)]
    pub href: String,
}

/// A read-only element that only wraps an `atom:link`.
///
/// Used for fields such as a workspace's `<dataStores>` or a datastore's
/// `<featureTypes>`, which point at sub-collections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkHolder {
    /// The embedded link, when present.
    #[serde(rename = "atom:link", alias = "link", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<AtomLink>,
}

impl LinkHolder {
    /// Returns the link target, if any.
    pub fn href(&self) -> Option<&str> {
        self.link.as_ref().map(|l| l.href.as_str())
    }
}

/// Resource reference returned by collection endpoints.
///
/// A collection lists only names and links; the full record needs a
/// follow-up fetch.
///
/// # Example
///
/// ```rust
/// use geoserver_client::api::common::ResourceRef;
///
/// let r = ResourceRef::new("sf");
/// assert_eq!(r.name, "sf");
/// assert!(r.href().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Name of the referenced resource.
    pub name: String,

    /// Link to the full representation.
    #[serde(rename = "atom:link", alias = "link", default, skip_serializing)]
    pub link: Option<AtomLink>,
}

impl ResourceRef {
    /// Creates a reference carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: None,
        }
    }

    /// Returns the link target, if any.
    pub fn href(&self) -> Option<&str> {
        self.link.as_ref().map(|l| l.href.as_str())
    }
}

/// A `<name>` wrapper used for workspace, style, namespace and store references.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRef {
    /// Referenced resource name.
    #[serde(default)]
    pub name: String,
}

impl NamedRef {
    /// Creates a reference to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A reference carrying a `class` attribute, e.g. `<store class="dataStore">`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassedRef {
    /// Java class alias of the referenced object.
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Referenced resource name.
    #[serde(default)]
    pub name: String,
}

/// One `<entry key="...">value</entry>` of a metadata or parameter map.
///
/// Most entries hold plain text. Time and elevation entries of a layer hold
/// a nested `<dimensionInfo>` element instead, see [`EntryValue`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Entry key.
    #[serde(rename = "@key")]
    pub key: String,

    /// Entry content.
    #[serde(rename = "$value", default)]
    pub value: EntryValue,
}

impl MetadataEntry {
    /// Creates a text entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: EntryValue::Text(value.into()),
        }
    }

    /// Creates an entry holding a dimension definition.
    pub fn dimension(key: impl Into<String>, info: DimensionInfo) -> Self {
        Self {
            key: key.into(),
            value: EntryValue::DimensionInfo(info),
        }
    }
}

/// Content of a [`MetadataEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryValue {
    /// A `<dimensionInfo>` child element.
    #[serde(rename = "dimensionInfo")]
    DimensionInfo(DimensionInfo),

    /// Plain text content.
    #[serde(rename = "$text")]
    Text(String),
}

impl Default for EntryValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl EntryValue {
    /// The text content, `None` for structured values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::DimensionInfo(_) => None,
        }
    }
}

/// Time or elevation dimension settings of a layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionInfo {
    #[serde(default)]
    pub enabled: bool,

    /// Attribute holding the dimension value (vector layers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    #[serde(rename = "endAttribute", default, skip_serializing_if = "Option::is_none")]
    pub end_attribute: Option<String>,

    /// `LIST`, `CONTINUOUS_INTERVAL` or `DISCRETE_INTERVAL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(rename = "unitSymbol", default, skip_serializing_if = "Option::is_none")]
    pub unit_symbol: Option<String>,

    /// Value used when a request omits the dimension.
    #[serde(rename = "defaultValue", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DimensionDefault>,

    #[serde(rename = "nearestMatchEnabled", default, skip_serializing_if = "Option::is_none")]
    pub nearest_match_enabled: Option<bool>,

    #[serde(rename = "acceptableInterval", default, skip_serializing_if = "Option::is_none")]
    pub acceptable_interval: Option<String>,
}

/// `<defaultValue>` of a [`DimensionInfo`]; both parts are optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionDefault {
    /// `MINIMUM`, `MAXIMUM`, `NEAREST` or `FIXED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    #[serde(rename = "referenceValue", default, skip_serializing_if = "Option::is_none")]
    pub reference_value: Option<String>,
}

/// A `<metadata>` or `<connectionParameters>` map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntryMap {
    /// The entries, in document order.
    #[serde(rename = "entry", default)]
    pub entries: Vec<MetadataEntry>,
}

impl EntryMap {
    /// Looks up the text value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(EntryValue::as_text)
    }

    /// Looks up the raw value of `key`, text or structured.
    pub fn value(&self, key: &str) -> Option<&EntryValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Looks up the dimension stored under `key` (`time`, `elevation`).
    pub fn dimension(&self, key: &str) -> Option<&DimensionInfo> {
        match self.value(key)? {
            EntryValue::DimensionInfo(info) => Some(info),
            EntryValue::Text(_) => None,
        }
    }

    /// Returns `true` when the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EntryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| MetadataEntry::new(k, v))
                .collect(),
        }
    }
}

/// A `<keywords><string>..</string></keywords>` list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Keywords {
    /// The keywords.
    #[serde(rename = "string", default)]
    pub values: Vec<String>,
}

/// A coordinate reference system.
///
/// GeoServer writes a bare code (`<srs>EPSG:4326</srs>`) for well-known
/// systems and a WKT with a `class` attribute (`projected`, `geographic`)
/// otherwise. Both forms land in this one struct.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Crs {
    /// CRS kind, present only for WKT definitions.
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// CRS code or WKT.
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl Crs {
    /// A bare CRS code such as `EPSG:4326`.
    pub fn code(value: impl Into<String>) -> Self {
        Self {
            class: None,
            value: value.into(),
        }
    }
}

/// A bounding box with its CRS.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum X.
    #[serde(default)]
    pub minx: f64,
    /// Maximum X.
    #[serde(default)]
    pub maxx: f64,
    /// Minimum Y.
    #[serde(default)]
    pub miny: f64,
    /// Maximum Y.
    #[serde(default)]
    pub maxy: f64,
    /// CRS of the coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
}
