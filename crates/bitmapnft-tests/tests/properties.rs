//! Property-based tests for the encoding and rendering laws.
//!
//! ```bash
//! cargo test -p bitmapnft-tests --test properties
//! ```

use proptest::prelude::*;

use bitmapnft_backend_svg::{encode_runs, expand_runs, generate_grid, render, Grid};
use bitmapnft_model::{AttributeValue, Color, Palette};
use bitmapnft_tests::{renderer_with, tile_coverage};

/// Rectangular grids up to 12x12 with up to 5 colors.
fn arbitrary_grid() -> impl Strategy<Value = Grid> {
    (1usize..=12, 1usize..=12, 1u8..=5)
        .prop_flat_map(|(width, height, colors)| {
            prop::collection::vec(prop::collection::vec(0..colors, width), height)
        })
        .prop_map(|rows| Grid::from_rows(rows).expect("strategy yields rectangular rows"))
}

fn palette(size: usize) -> Palette {
    (0..size)
        .map(|i| Color::rgb(i as u8 * 40, 255 - i as u8 * 40, 128))
        .collect()
}

proptest! {
    /// Expanding the runs reproduces the grid exactly.
    #[test]
    fn runs_round_trip(grid in arbitrary_grid()) {
        let original: Vec<Vec<u8>> = grid.rows().map(<[u8]>::to_vec).collect();
        prop_assert_eq!(expand_runs(&encode_runs(&grid)), original);
    }

    /// Run lengths sum to the width and adjacent runs differ in color.
    #[test]
    fn runs_are_maximal(grid in arbitrary_grid()) {
        let runs = encode_runs(&grid);
        prop_assert_eq!(runs.len(), grid.height() as usize);
        for row in &runs {
            let sum: u32 = row.iter().map(|r| r.length).sum();
            prop_assert_eq!(sum, grid.width());
            prop_assert!(row.iter().all(|r| r.length > 0));
            prop_assert!(row.windows(2).all(|w| w[0].color != w[1].color));
        }
    }

    /// Rectangles partition the canvas with no gaps or overlaps.
    #[test]
    fn rects_tile_canvas(grid in arbitrary_grid(), cell_size in 1u32..=4) {
        let doc = render(&encode_runs(&grid), &palette(5), cell_size, Color::white()).unwrap();
        prop_assert_eq!(doc.width, grid.width() * cell_size);
        prop_assert_eq!(doc.height, grid.height() * cell_size);
        prop_assert_eq!(
            doc.rects.len(),
            encode_runs(&grid).iter().map(Vec::len).sum::<usize>()
        );

        let coverage = tile_coverage(&doc);
        prop_assert!(coverage.is_exact(), "{:?}", coverage);
    }

    /// Generated grids stay inside the palette and match the requested size.
    #[test]
    fn generated_grid_in_range(
        seed in any::<u64>(),
        width in 1u32..=32,
        height in 1u32..=32,
        palette_size in 1usize..=256,
    ) {
        let grid = generate_grid(seed, width, height, palette_size);
        prop_assert_eq!(grid.cells().len(), (width * height) as usize);
        prop_assert!(grid.cells().iter().all(|&c| (c as usize) < palette_size));
        prop_assert_eq!(grid, generate_grid(seed, width, height, palette_size));
    }

    /// Metadata traits are derivable from the grid of the same id.
    #[test]
    fn metadata_traits_match_grid(id in any::<u64>()) {
        let renderer = renderer_with(|c| {
            c.width = 8;
            c.height = 8;
        });
        let meta = renderer.get_metadata(id).unwrap();
        let grid = renderer.grid(id);
        let runs = encode_runs(&grid);

        prop_assert!(!meta.name.is_empty());
        prop_assert!(!meta.description.is_empty());
        prop_assert_eq!(
            meta.attribute("Colors Used"),
            Some(&AttributeValue::Number(grid.distinct_colors() as u64))
        );
        let dominant = renderer.config().palette.get(grid.dominant_color()).unwrap();
        prop_assert_eq!(
            meta.attribute("Dominant Color"),
            Some(&AttributeValue::Text(dominant.to_hex()))
        );
        prop_assert_eq!(
            meta.attribute("Run Count"),
            Some(&AttributeValue::Number(runs.iter().map(Vec::len).sum::<usize>() as u64))
        );
        prop_assert_eq!(meta.decode_image().unwrap(), renderer.get_svg(id).unwrap());
    }
}
