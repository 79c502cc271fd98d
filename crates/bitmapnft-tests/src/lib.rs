//! bitmapnft End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the rendering laws:
//!
//! - **Determinism**: the same token id always renders byte-identical output
//! - **Round trip**: expanding encoded runs reproduces the grid
//! - **Tiling**: rectangles partition the canvas exactly
//! - **Metadata shape**: name, description, embedded image, grid-derived traits
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bitmapnft-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{default_renderer, renderer_with, tile_coverage, TileCoverage};
