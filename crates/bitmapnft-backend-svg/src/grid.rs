//! Pixel grid generation.
//!
//! A grid is a `width x height` array of palette indices stored row-major.
//! Each row draws from its own PCG32 stream seeded by
//! [`derive_row_seed`], so the row counter is mixed into the token seed and
//! no state survives between calls.

use serde::Serialize;

use bitmapnft_model::{derive_row_seed, Seed};

use crate::rng::DeterministicRng;

/// Fixed-size array of palette indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from explicit rows.
    ///
    /// Returns `None` when the rows are empty, a row is empty, or the rows
    /// have different lengths.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            width: u32::try_from(width).ok()?,
            height: u32::try_from(rows.len()).ok()?,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Palette index at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells holding each palette index (index -> count).
    pub fn histogram(&self) -> [u32; 256] {
        let mut counts = [0u32; 256];
        for &cell in &self.cells {
            counts[cell as usize] += 1;
        }
        counts
    }

    /// Number of distinct palette indices present.
    pub fn distinct_colors(&self) -> u32 {
        self.histogram().iter().filter(|&&n| n > 0).count() as u32
    }

    /// Most frequent palette index; ties go to the lowest index.
    pub fn dominant_color(&self) -> u8 {
        let counts = self.histogram();
        let mut best = 0usize;
        for (index, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = index;
            }
        }
        best as u8
    }
}

/// Generate the grid for a seed.
///
/// Cells are filled row by row, left to right. Calling this twice with the
/// same arguments returns equal grids.
///
/// # Arguments
/// * `seed` - Token seed
/// * `width` - Grid width in cells
/// * `height` - Grid height in cells
/// * `palette_size` - Number of palette colors; indices fall in `0..palette_size`
pub fn generate_grid(seed: Seed, width: u32, height: u32, palette_size: usize) -> Grid {
    let mut cells = Vec::with_capacity(width as usize * height as usize);

    for row in 0..height {
        let mut rng = DeterministicRng::new(derive_row_seed(seed, row));
        cells.extend((0..width).map(|_| rng.gen_index(palette_size)));
    }

    Grid {
        width,
        height,
        cells,
    }
}
