//
//  geoserver-client
//  api/common/codec.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! XML encoding and decoding helpers.
//!
//! GeoServer ignores the XML prolog and namespaces on input, so encoding is a
//! plain `quick-xml` serialization under an explicit root element. Decoding
//! ignores the root element name; callers pick the target type.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{GeoServerError, Result};

/// Serializes `value` as an XML document rooted at `<root>`.
pub fn encode<T: Serialize>(root: &str, value: &T) -> Result<String> {
    quick_xml::se::to_string_with_root(root, value)
        .map_err(|e| GeoServerError::Encode(format!("<{}>: {}", root, e)))
}

/// Deserializes an XML document into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    quick_xml::de::from_str(body).map_err(|e| GeoServerError::Decode(e.to_string()))
}

/// Like [`decode`], but a blank body yields `T::default()`.
///
/// GeoServer answers some empty collections with no body at all.
pub fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    decode(body)
}
