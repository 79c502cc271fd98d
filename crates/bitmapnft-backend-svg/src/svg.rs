//! SVG rendering of run-length encoded rows.
//!
//! One `<rect>` is emitted per run. Runs tile their row exactly, so the
//! rectangles partition the canvas with no gaps or overlaps.

use std::fmt;

use serde::Serialize;

use bitmapnft_model::{Color, Palette};

use crate::error::GeometryError;
use crate::rle::Run;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An axis-aligned filled rectangle in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub fill: Color,
}

impl Rect {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A self-contained vector document: canvas attributes plus primitives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorDocument {
    /// Canvas width in user units.
    pub width: u32,
    /// Canvas height in user units.
    pub height: u32,
    pub background: Color,
    /// Rectangles in row-major order, one per run.
    pub rects: Vec<Rect>,
}

impl VectorDocument {
    /// Serialize to SVG text.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }

    /// Sum of rectangle areas.
    pub fn covered_area(&self) -> u64 {
        self.rects.iter().map(Rect::area).sum()
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="{ns}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" shape-rendering="crispEdges" style="background-color:{bg}">"#,
            ns = SVG_NAMESPACE,
            w = self.width,
            h = self.height,
            bg = self.background,
        )?;
        for rect in &self.rects {
            write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                rect.x, rect.y, rect.width, rect.height, rect.fill
            )?;
        }
        write!(f, "</svg>")
    }
}

/// Render encoded rows into a vector document.
///
/// Row `y` occupies `y * cell_size .. (y + 1) * cell_size`; each run starts
/// at its cumulative cell offset times `cell_size`. An index outside the
/// palette falls back to the background color; validated configurations
/// never produce one.
///
/// # Arguments
/// * `rows` - Encoded rows; every row must cover as many cells as the first
/// * `palette` - Colors indexed by run color
/// * `cell_size` - Edge length of one cell
/// * `background` - Canvas background color
///
/// # Errors
/// [`GeometryError::RaggedRow`] if row widths differ, and
/// [`GeometryError::CanvasOverflow`] if a canvas side exceeds `u32`.
pub fn render(
    rows: &[Vec<Run>],
    palette: &Palette,
    cell_size: u32,
    background: Color,
) -> Result<VectorDocument, GeometryError> {
    let grid_width = rows.first().map_or(0, |runs| row_cells(runs));
    for (row, runs) in rows.iter().enumerate() {
        let actual = row_cells(runs);
        if actual != grid_width {
            return Err(GeometryError::RaggedRow {
                row,
                expected: grid_width,
                actual,
            });
        }
    }

    let width = scale("width", grid_width, cell_size)?;
    let height = scale("height", rows.len() as u64, cell_size)?;

    // Every offset and extent below is bounded by `width` or `height`.
    let mut rects = Vec::with_capacity(rows.iter().map(Vec::len).sum());
    for (row_index, runs) in rows.iter().enumerate() {
        let y = row_index as u32 * cell_size;
        let mut offset = 0u32;

        for run in runs {
            rects.push(Rect {
                x: offset * cell_size,
                y,
                width: run.length * cell_size,
                height: cell_size,
                fill: palette.get(run.color).unwrap_or(background),
            });
            offset += run.length;
        }
    }

    Ok(VectorDocument {
        width,
        height,
        background,
        rects,
    })
}

fn row_cells(runs: &[Run]) -> u64 {
    runs.iter().map(|run| u64::from(run.length)).sum()
}

fn scale(axis: &'static str, cells: u64, cell_size: u32) -> Result<u32, GeometryError> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(cell_size))
        .ok_or(GeometryError::CanvasOverflow {
            axis,
            cells,
            cell_size,
        })
}
