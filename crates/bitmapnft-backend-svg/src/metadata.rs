//! Metadata document assembly.

use bitmapnft_model::{
    encode_data_uri, Attribute, MetadataDocument, RenderConfig, TokenId, SVG_MEDIA_TYPE,
};

use crate::grid::Grid;
use crate::rle::{longest_run, total_runs, Run};

pub const TRAIT_COLORS_USED: &str = "Colors Used";
pub const TRAIT_DOMINANT_COLOR: &str = "Dominant Color";
pub const TRAIT_RUN_COUNT: &str = "Run Count";
pub const TRAIT_LONGEST_RUN: &str = "Longest Run";

/// Traits derived purely from the grid and its encoded rows, in a fixed order.
pub fn derive_attributes(
    grid: &Grid,
    runs: &[Vec<Run>],
    config: &RenderConfig,
) -> Vec<Attribute> {
    let dominant = config
        .palette
        .get(grid.dominant_color())
        .unwrap_or(config.background);

    vec![
        Attribute::new(TRAIT_COLORS_USED, grid.distinct_colors() as u64),
        Attribute::new(TRAIT_DOMINANT_COLOR, dominant.to_hex()),
        Attribute::new(TRAIT_RUN_COUNT, total_runs(runs) as u64),
        Attribute::new(TRAIT_LONGEST_RUN, longest_run(runs) as u64),
    ]
}

/// Token name, e.g. `"Bitmap #7"`.
pub fn token_name(config: &RenderConfig, token_id: TokenId) -> String {
    format!("{} #{}", config.name_prefix, token_id)
}

/// Assemble the metadata document for a token.
///
/// `runs` must be the encoding of `grid` and `svg` its rendered text. The
/// image is embedded as a base64 `data:image/svg+xml` URI, so the document
/// resolves without any network fetch.
pub fn build_metadata(
    token_id: TokenId,
    grid: &Grid,
    runs: &[Vec<Run>],
    svg: &str,
    config: &RenderConfig,
) -> MetadataDocument {
    MetadataDocument {
        name: token_name(config, token_id),
        description: config.description.clone(),
        image: encode_data_uri(SVG_MEDIA_TYPE, svg.as_bytes()),
        attributes: derive_attributes(grid, runs, config),
    }
}
