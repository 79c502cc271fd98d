//! bitmapnft SVG Backend
//!
//! This crate renders a unique pixel-art SVG for a token id as a pure
//! function of that id. All output is byte-identical for the same id and
//! configuration.
//!
//! Pipeline:
//!
//! ```text
//! token id -> seed -> grid -> runs -> vector document -> metadata document
//! ```
//!
//! # Example
//!
//! ```
//! use bitmapnft_backend_svg::BitmapRenderer;
//! use bitmapnft_model::{MetadataDocument, RenderConfig};
//!
//! let renderer = BitmapRenderer::new(RenderConfig::default()).unwrap();
//!
//! let svg = renderer.get_svg(1).unwrap();
//! assert!(svg.starts_with("<svg"));
//!
//! let uri = renderer.token_uri(1).unwrap();
//! let metadata = MetadataDocument::from_data_uri(&uri).unwrap();
//! assert_eq!(metadata.name, "Bitmap #1");
//! ```
//!
//! # Determinism
//!
//! - Seeds come from BLAKE3 over the salt and token id
//! - Each grid row draws from its own PCG32 stream
//! - Nothing is cached or persisted between queries

pub mod error;
pub mod grid;
pub mod metadata;
pub mod registry;
pub mod render;
pub mod rle;
pub mod rng;
pub mod svg;

pub use error::{GeometryError, RegistryError, RenderError};
pub use grid::{generate_grid, Grid};
pub use metadata::{build_metadata, derive_attributes};
pub use registry::{GatedRenderer, MintedSet, OpenRegistry, TokenRegistry};
pub use render::{BitmapRenderer, ImageStats, RenderedToken};
pub use rle::{encode_row, encode_runs, expand_runs, Run};
pub use rng::DeterministicRng;
pub use svg::{render, Rect, VectorDocument};
