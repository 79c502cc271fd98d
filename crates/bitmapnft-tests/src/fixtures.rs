//! Shared renderers and geometry checks for integration tests.

use bitmapnft_backend_svg::{BitmapRenderer, VectorDocument};
use bitmapnft_model::RenderConfig;

/// Renderer over the built-in configuration.
pub fn default_renderer() -> BitmapRenderer {
    renderer_with(|_| {})
}

/// Renderer over the built-in configuration after `edit`.
///
/// # Panics
/// If the edited configuration is invalid.
pub fn renderer_with<F: FnOnce(&mut RenderConfig)>(edit: F) -> BitmapRenderer {
    let mut config = RenderConfig::default();
    edit(&mut config);
    BitmapRenderer::new(config).expect("fixture configuration must be valid")
}

/// How the rectangles of a document cover its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoverage {
    /// Sum of rectangle areas.
    pub covered_area: u64,
    /// `width * height` of the canvas.
    pub canvas_area: u64,
    /// Canvas units covered by no rectangle.
    pub gaps: u64,
    /// Canvas units covered by more than one rectangle.
    pub overlaps: u64,
    /// Rectangles extending past the canvas edge.
    pub out_of_bounds: usize,
}

impl TileCoverage {
    /// Rectangles partition the canvas exactly.
    pub fn is_exact(&self) -> bool {
        self.gaps == 0
            && self.overlaps == 0
            && self.out_of_bounds == 0
            && self.covered_area == self.canvas_area
    }
}

/// Measure coverage unit by unit.
///
/// Intended for small canvases; cost is proportional to the canvas area.
pub fn tile_coverage(doc: &VectorDocument) -> TileCoverage {
    let width = doc.width as usize;
    let height = doc.height as usize;
    let mut hits = vec![0u32; width * height];
    let mut out_of_bounds = 0;

    for rect in &doc.rects {
        let right = rect.x as u64 + rect.width as u64;
        let bottom = rect.y as u64 + rect.height as u64;
        if right > doc.width as u64 || bottom > doc.height as u64 {
            out_of_bounds += 1;
            continue;
        }
        for y in rect.y as usize..bottom as usize {
            for x in rect.x as usize..right as usize {
                hits[y * width + x] += 1;
            }
        }
    }

    TileCoverage {
        covered_area: doc.covered_area(),
        canvas_area: doc.width as u64 * doc.height as u64,
        gaps: hits.iter().filter(|&&h| h == 0).count() as u64,
        overlaps: hits.iter().map(|&h| h.saturating_sub(1) as u64).sum(),
        out_of_bounds,
    }
}
