//! Backend error types.

use bitmapnft_model::{ConfigError, TokenId};
use thiserror::Error;

/// Rejection signaled by a token registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("token {0} is not registered")]
    UnknownToken(TokenId),
}

/// Run rows that cannot be laid out on a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A row does not cover the same number of cells as the first row.
    #[error("row {row} covers {actual} cells, expected {expected}")]
    RaggedRow { row: usize, expected: u64, actual: u64 },

    /// A canvas side does not fit in `u32` user units.
    #[error("canvas {axis} of {cells} cells at cell size {cell_size} overflows u32")]
    CanvasOverflow {
        axis: &'static str,
        cells: u64,
        cell_size: u32,
    },
}

/// Errors from building a renderer or serving a query.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configuration failed setup-time validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The registry refused the token id.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The encoded rows could not be laid out.
    #[error("layout failed: {0}")]
    Geometry(#[from] GeometryError),

    /// The metadata document could not be serialized.
    #[error("metadata serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
