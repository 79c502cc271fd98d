//! bitmapnft Canonical Types
//!
//! This crate provides the types shared by every bitmapnft crate: the render
//! configuration and its validation, palette colors, seed derivation, and the
//! metadata document with its `data:` URI transport encoding.
//!
//! # Example
//!
//! ```
//! use bitmapnft_model::{derive_seed, RenderConfig};
//!
//! let config = RenderConfig::default();
//! config.validate().unwrap();
//!
//! let seed = derive_seed(&config.salt, 1);
//! assert_eq!(seed, derive_seed(&config.salt, 1));
//! ```
//!
//! # Modules
//!
//! - [`color`]: Palette colors with `#rrggbb` serialization
//! - [`config`]: Render configuration and setup-time validation
//! - [`error`]: Configuration, color, and transport errors
//! - [`hash`]: Seed derivation and output fingerprints
//! - [`metadata`]: Metadata document and `data:` URI helpers

pub mod color;
pub mod config;
pub mod error;
pub mod hash;
pub mod metadata;

pub use color::{Color, Palette};
pub use config::{RenderConfig, MAX_GRID_DIMENSION, MAX_PALETTE_SIZE};
pub use error::{ColorParseError, ConfigError, ConfigErrorCode, TransportError};
pub use hash::{canonical_hash, derive_row_seed, derive_seed, Seed, TokenId};
pub use metadata::{
    decode_data_uri, encode_data_uri, Attribute, AttributeValue, MetadataDocument,
    JSON_MEDIA_TYPE, SVG_MEDIA_TYPE,
};
