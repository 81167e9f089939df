//
//  geoserver-client
//  api/catalog/styles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Style API types and operations.
//!
//! A style has two halves: an XML metadata record (name, format, language
//! version, file name) and the style body itself, written in SLD, CSS, YSLD
//! or MBStyle. The metadata travels as `application/xml`; the body travels
//! with the MIME type of its format, chosen by
//! [`StyleFormat::content_type`].
//!
//! # Creating a Style
//!
//! ```rust,no_run
//! use geoserver_client::api::GeoServerClient;
//! use geoserver_client::api::catalog::Style;
//!
//! # async fn run(client: GeoServerClient) -> geoserver_client::api::Result<()> {
//! let style = Style::new("outline", "css", None);
//! client.create_style(Some("topp"), &style).await?;
//! client
//!     .update_style_body(Some("topp"), &style, "* { stroke: #000000; }")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Content Types
//!
//! | Format | Version | MIME type |
//! |--------|---------|-----------|
//! | `sld` | `1.0.0` | `application/vnd.ogc.sld+xml` |
//! | `sld` | other | `application/vnd.ogc.se+xml` |
//! | `css` | any | `application/vnd.geoserver.geocss+css` |
//! | `yaml` | any | `application/vnd.geoserver.ysld+yaml` |
//! | `json` | any | `application/vnd.geoserver.mbstyle+json` |
//! | other | any | `application/vnd.ogc.sld+xml` |

use std::fmt;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::APPLICATION_XML;
use crate::api::common::{codec, NamedRef, ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a style document.
pub const STYLE_ROOT: &str = "style";

/// Style language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleFormat {
    /// Styled Layer Descriptor / Symbology Encoding.
    #[default]
    Sld,
    /// GeoCSS.
    Css,
    /// YSLD.
    Yaml,
    /// Mapbox GL style.
    Json,
    /// Any format this client does not know.
    Other,
}

impl StyleFormat {
    /// Parses the `<format>` value GeoServer reports.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sld" => Self::Sld,
            "css" => Self::Css,
            "yaml" => Self::Yaml,
            "json" => Self::Json,
            _ => Self::Other,
        }
    }

    /// Returns the MIME type used to read or write a style body.
    ///
    /// The language version only matters for SLD: `1.0.0` is plain SLD,
    /// anything else (including no version) is Symbology Encoding 1.1.
    pub fn content_type(self, version: Option<&str>) -> &'static str {
        match self {
            Self::Sld if version == Some("1.0.0") => "application/vnd.ogc.sld+xml",
            Self::Sld => "application/vnd.ogc.se+xml",
            Self::Css => "application/vnd.geoserver.geocss+css",
            Self::Yaml => "application/vnd.geoserver.ysld+yaml",
            Self::Json => "application/vnd.geoserver.mbstyle+json",
            Self::Other => "application/vnd.ogc.sld+xml",
        }
    }
}

impl From<&str> for StyleFormat {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for StyleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sld => "sld",
            Self::Css => "css",
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Style metadata record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Style name.
    pub name: String,

    /// Owning workspace, absent for global styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<NamedRef>,

    /// Format name: `sld`, `css`, `yaml` or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Language version of the body.
    #[serde(rename = "languageVersion", default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<LanguageVersion>,

    /// File name of the body in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// `<languageVersion><version>..</version></languageVersion>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LanguageVersion {
    /// Version string such as `1.0.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Style {
    /// Creates a style record with the given format and optional version.
    pub fn new(name: impl Into<String>, format: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            format: Some(format.into()),
            language_version: version.map(|v| LanguageVersion {
                version: Some(v.to_string()),
            }),
            ..Default::default()
        }
    }

    /// The parsed format; a missing format counts as SLD.
    pub fn style_format(&self) -> StyleFormat {
        self.format
            .as_deref()
            .map(StyleFormat::from_name)
            .unwrap_or_default()
    }

    /// The language version, if declared.
    pub fn version(&self) -> Option<&str> {
        self.language_version
            .as_ref()
            .and_then(|v| v.version.as_deref())
    }

    /// MIME type of this style's body.
    pub fn content_type(&self) -> &'static str {
        self.style_format().content_type(self.version())
    }
}

#[derive(Debug, Default, Deserialize)]
struct StyleList {
    #[serde(rename = "style", default)]
    styles: Vec<ResourceRef>,
}

fn styles(workspace: Option<&str>) -> Endpoint {
    Endpoint::scoped(workspace).push("styles")
}

impl GeoServerClient {
    /// Lists style records, globally or within a workspace.
    pub async fn list_styles(&self, workspace: Option<&str>) -> Result<Vec<Style>> {
        self.fetch_all(
            &styles(workspace),
            |l: StyleList| l.styles,
            |name| styles(workspace).push(name),
        )
        .await
    }

    /// Gets a style record.
    pub async fn get_style(&self, workspace: Option<&str>, name: &str) -> Result<Style> {
        self.fetch(&styles(workspace).push(name), StatusTable::READ)
            .await
    }

    /// Downloads a style body in the given format.
    ///
    /// Both `Content-Type` and `Accept` carry the format's MIME type, which
    /// is how GeoServer picks the representation to return.
    pub async fn get_style_body(
        &self,
        workspace: Option<&str>,
        name: &str,
        format: StyleFormat,
        version: Option<&str>,
    ) -> Result<String> {
        let endpoint = styles(workspace).push(name);
        let response = self
            .typed_request(Method::GET, &endpoint, None, format.content_type(version))
            .await?;
        StatusTable::READ.classify(response.status, &response.body, &endpoint.to_string())?;
        Ok(response.body)
    }

    /// Creates a style record. Upload the body afterwards with
    /// [`update_style_body`](Self::update_style_body).
    pub async fn create_style(&self, workspace: Option<&str>, style: &Style) -> Result<()> {
        let endpoint = styles(workspace);
        let body = codec::encode(STYLE_ROOT, style)?;
        let response = self
            .fully_typed_request(Method::POST, &endpoint, Some(body), APPLICATION_XML, "")
            .await?;
        StatusTable::CREATE.classify(response.status, &response.body, &endpoint.to_string())
    }

    /// Replaces the record of the style `name`.
    ///
    /// Only the metadata changes; the body is left as is. Renaming is done by
    /// changing `style.name`.
    pub async fn update_style(
        &self,
        workspace: Option<&str>,
        name: &str,
        style: &Style,
    ) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &styles(workspace).push(name),
            STYLE_ROOT,
            style,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Creates a style straight from its body, POSTed to the style collection.
    ///
    /// GeoServer derives the style name from the body; `style` only selects
    /// the content type.
    pub async fn upload_style_body(
        &self,
        workspace: Option<&str>,
        style: &Style,
        body: &str,
    ) -> Result<()> {
        let endpoint = styles(workspace);
        self.send_style_body(Method::POST, &endpoint, style, body, StatusTable::CREATE)
            .await
    }

    /// Replaces the body of the existing style `style.name`.
    pub async fn update_style_body(
        &self,
        workspace: Option<&str>,
        style: &Style,
        body: &str,
    ) -> Result<()> {
        let endpoint = styles(workspace).push(style.name.as_str());
        self.send_style_body(Method::PUT, &endpoint, style, body, StatusTable::BODY_UPDATE)
            .await
    }

    async fn send_style_body(
        &self,
        method: Method,
        endpoint: &Endpoint,
        style: &Style,
        body: &str,
        table: StatusTable,
    ) -> Result<()> {
        let response = self
            .fully_typed_request(method, endpoint, Some(body.to_string()), style.content_type(), "")
            .await?;
        table.classify(response.status, &response.body, &endpoint.to_string())
    }

    /// Deletes a style.
    ///
    /// # Parameters
    ///
    /// * `purge` - Also delete the body file from the data directory
    /// * `recurse` - Also remove the style from layers referencing it
    pub async fn delete_style(
        &self,
        workspace: Option<&str>,
        name: &str,
        purge: bool,
        recurse: bool,
    ) -> Result<()> {
        let endpoint = styles(workspace)
            .push(name)
            .flag("purge", purge)
            .flag("recurse", recurse);
        self.remove(&endpoint, StatusTable::DELETE).await
    }
}
