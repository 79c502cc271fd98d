//! Metadata document types and their `data:` URI transport encoding.
//!
//! The document follows the common token-metadata JSON shape:
//!
//! ```json
//! {
//!   "name": "Bitmap #1",
//!   "description": "...",
//!   "image": "data:image/svg+xml;base64,...",
//!   "attributes": [{ "trait_type": "Colors Used", "value": 4 }]
//! }
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// Media type of an embedded SVG image.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Media type of an encoded metadata document.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A trait value: either text or a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(u64),
    Text(String),
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

/// A named trait derived from the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Descriptive record for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataDocument {
    /// Human-readable name, parameterized by the token id.
    pub name: String,
    /// Fixed description.
    pub description: String,
    /// The SVG image as a `data:image/svg+xml;base64,` URI.
    pub image: String,
    /// Ordered trait list.
    pub attributes: Vec<Attribute>,
}

impl MetadataDocument {
    /// Look up a trait value by name.
    pub fn attribute(&self, trait_type: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| &a.value)
    }

    /// Compact JSON form. Field order is fixed, so output is deterministic.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Transport form: `data:application/json;base64,<json>`.
    pub fn to_data_uri(&self) -> Result<String, serde_json::Error> {
        Ok(encode_data_uri(JSON_MEDIA_TYPE, self.to_json()?.as_bytes()))
    }

    /// Reverse of [`to_data_uri`](Self::to_data_uri).
    pub fn from_data_uri(uri: &str) -> Result<Self, TransportError> {
        let bytes = decode_data_uri(uri, JSON_MEDIA_TYPE)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Decode the embedded image back into SVG text.
    pub fn decode_image(&self) -> Result<String, TransportError> {
        let bytes = decode_data_uri(&self.image, SVG_MEDIA_TYPE)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Encodes bytes as `data:<media_type>;base64,<payload>`.
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Decodes a base64 `data:` URI, checking its media type.
pub fn decode_data_uri(uri: &str, expected_media_type: &str) -> Result<Vec<u8>, TransportError> {
    let rest = uri.strip_prefix("data:").ok_or(TransportError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(TransportError::NotDataUri)?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or(TransportError::NotBase64)?;

    if media_type != expected_media_type {
        return Err(TransportError::MediaType {
            expected: expected_media_type.to_string(),
            actual: media_type.to_string(),
        });
    }

    Ok(STANDARD.decode(payload)?)
}
