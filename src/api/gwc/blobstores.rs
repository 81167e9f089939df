//
//  geoserver-client
//  api/gwc/blobstores.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GeoWebCache blobstore operations.
//!
//! A blobstore is where tiles end up. GeoWebCache ships a file system
//! store and an S3 store; both share the `/blobstores/{id}` endpoint and
//! differ only in their root element.
//!
//! # Example
//!
//! ```rust,no_run
//! use geoserver_client::api::gwc::FileBlobstore;
//! use geoserver_client::api::GeoServerClient;
//!
//! # async fn run(gwc: GeoServerClient) -> geoserver_client::api::Result<()> {
//! let store = FileBlobstore::new("tiles", "/var/cache/gwc");
//! gwc.create_file_blobstore("tiles", &store).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ResourceRef, Result, StatusTable};
use crate::api::{Endpoint, GeoServerClient};

/// Root element of a file system blobstore.
pub const FILE_BLOBSTORE_ROOT: &str = "FileBlobStore";

/// Root element of an S3 blobstore.
pub const S3_BLOBSTORE_ROOT: &str = "S3BlobStore";

/// Tile storage on the local file system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileBlobstore {
    /// Blobstore identifier, also its URL segment.
    pub id: String,

    /// Disabled stores reject tile reads and writes.
    #[serde(default)]
    pub enabled: bool,

    /// Root directory of the tile cache.
    #[serde(rename = "baseDirectory", default)]
    pub base_directory: String,

    /// Block size of the underlying file system, in bytes.
    #[serde(rename = "fileSystemBlockSize", default)]
    pub file_system_block_size: u32,
}

impl FileBlobstore {
    /// An enabled store writing under `base_directory` with 4 KiB blocks.
    pub fn new(id: impl Into<String>, base_directory: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            base_directory: base_directory.into(),
            file_system_block_size: 4096,
        }
    }
}

/// Tile storage in an S3 bucket.
///
/// `Debug` output hides `aws_secret_key`.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct S3Blobstore {
    /// Blobstore identifier, also its URL segment.
    pub id: String,

    /// Bucket name.
    #[serde(default)]
    pub bucket: String,

    /// Key prefix inside the bucket.
    #[serde(default)]
    pub prefix: String,

    /// Access key id.
    #[serde(rename = "awsAccessKey", default)]
    pub aws_access_key: String,

    /// Secret access key.
    #[serde(rename = "awsSecretKey", default)]
    pub aws_secret_key: String,

    /// `PUBLIC` or `PRIVATE`.
    #[serde(default)]
    pub access: String,

    /// Endpoint of an S3-compatible service; empty for AWS.
    #[serde(default)]
    pub endpoint: String,

    /// Size of the S3 client connection pool.
    #[serde(rename = "maxConnections", default)]
    pub max_connections: u32,

    #[serde(rename = "useHTTPS", default)]
    pub use_https: bool,

    /// Compress tiles before upload.
    #[serde(rename = "useGzip", default)]
    pub use_gzip: bool,

    /// Disabled stores reject tile reads and writes.
    #[serde(default)]
    pub enabled: bool,

    /// Whether layers without an explicit blobstore use this one.
    #[serde(rename = "__default", default)]
    pub is_default: bool,
}

impl std::fmt::Debug for S3Blobstore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Blobstore")
            .field("id", &self.id)
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .field("aws_access_key", &self.aws_access_key)
            .field("aws_secret_key", &"[REDACTED]")
            .field("access", &self.access)
            .field("endpoint", &self.endpoint)
            .field("max_connections", &self.max_connections)
            .field("use_https", &self.use_https)
            .field("use_gzip", &self.use_gzip)
            .field("enabled", &self.enabled)
            .field("is_default", &self.is_default)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct BlobstoreList {
    #[serde(rename = "blobStore", default)]
    items: Vec<ResourceRef>,
}

fn blobstores() -> Endpoint {
    Endpoint::new().push("blobstores")
}

fn blobstore(id: &str) -> Endpoint {
    blobstores().push(id)
}

impl GeoServerClient {
    /// Lists blobstore names.
    ///
    /// The collection mixes store kinds, so no per-item fetch is made; use
    /// [`get_file_blobstore`](Self::get_file_blobstore) or
    /// [`get_s3_blobstore`](Self::get_s3_blobstore) on the entries.
    pub async fn list_blobstores(&self) -> Result<Vec<ResourceRef>> {
        let list: BlobstoreList = self.fetch_collection(&blobstores()).await?;
        Ok(list.items)
    }

    /// Gets a file system blobstore.
    pub async fn get_file_blobstore(&self, id: &str) -> Result<FileBlobstore> {
        self.fetch(&blobstore(id), StatusTable::READ).await
    }

    /// Creates a file system blobstore under `id`.
    pub async fn create_file_blobstore(&self, id: &str, store: &FileBlobstore) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &blobstore(id),
            FILE_BLOBSTORE_ROOT,
            store,
            StatusTable::PUT_CREATE,
        )
        .await
    }

    /// Replaces the file system blobstore `id`.
    pub async fn update_file_blobstore(&self, id: &str, store: &FileBlobstore) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &blobstore(id),
            FILE_BLOBSTORE_ROOT,
            store,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes a file system blobstore. A store still used by cached layers
    /// answers [`NotEmpty`](crate::api::GeoServerError::NotEmpty).
    pub async fn delete_file_blobstore(&self, id: &str) -> Result<()> {
        self.remove(&blobstore(id), StatusTable::DELETE).await
    }

    /// Gets an S3 blobstore.
    pub async fn get_s3_blobstore(&self, id: &str) -> Result<S3Blobstore> {
        self.fetch(&blobstore(id), StatusTable::READ).await
    }

    /// Creates an S3 blobstore under `id`.
    pub async fn create_s3_blobstore(&self, id: &str, store: &S3Blobstore) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &blobstore(id),
            S3_BLOBSTORE_ROOT,
            store,
            StatusTable::PUT_CREATE,
        )
        .await
    }

    /// Replaces the S3 blobstore `id`.
    pub async fn update_s3_blobstore(&self, id: &str, store: &S3Blobstore) -> Result<()> {
        self.send_xml(
            Method::PUT,
            &blobstore(id),
            S3_BLOBSTORE_ROOT,
            store,
            StatusTable::UPDATE,
        )
        .await
    }

    /// Deletes an S3 blobstore.
    pub async fn delete_s3_blobstore(&self, id: &str) -> Result<()> {
        self.remove(&blobstore(id), StatusTable::DELETE).await
    }
}
