//! Query facade: token id in, SVG or metadata out.

use serde::Serialize;

use bitmapnft_model::{derive_seed, MetadataDocument, RenderConfig, Seed, TokenId};

use crate::error::RenderError;
use crate::grid::{generate_grid, Grid};
use crate::metadata::build_metadata;
use crate::rle::{encode_runs, longest_run, total_runs, Run};
use crate::svg::{render, VectorDocument};

/// Size figures for one rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageStats {
    pub run_count: usize,
    pub rect_count: usize,
    pub longest_run: u32,
    pub svg_bytes: usize,
    /// Whether `run_count` exceeded the configured soft budget.
    pub over_budget: bool,
}

/// Every intermediate of one render, for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedToken {
    pub token_id: TokenId,
    pub seed: Seed,
    pub grid: Grid,
    pub runs: Vec<Vec<Run>>,
    pub document: VectorDocument,
    /// `document` serialized once; not part of the inspect output.
    #[serde(skip)]
    pub svg: String,
    pub stats: ImageStats,
}

/// Renders any token id under a fixed, validated configuration.
///
/// Queries are total: every id in the domain renders, whether or not a
/// registry has minted it. See [`GatedRenderer`](crate::GatedRenderer) for
/// the restricted variant.
#[derive(Debug, Clone)]
pub struct BitmapRenderer {
    config: RenderConfig,
}

impl BitmapRenderer {
    /// Validate `config` and build a renderer.
    ///
    /// An invalid configuration is fatal; no queries can be served.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            palette = config.palette.len(),
            cell_size = config.cell_size,
            "renderer configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Seed for a token.
    pub fn seed(&self, token_id: TokenId) -> Seed {
        derive_seed(&self.config.salt, token_id)
    }

    /// Grid for a token.
    pub fn grid(&self, token_id: TokenId) -> Grid {
        generate_grid(
            self.seed(token_id),
            self.config.width,
            self.config.height,
            self.config.palette.len(),
        )
    }

    /// Run the full pipeline and keep every intermediate.
    ///
    /// Fails only if the grid cannot be laid out on the canvas, which a
    /// validated configuration rules out.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render_token(&self, token_id: TokenId) -> Result<RenderedToken, RenderError> {
        let seed = self.seed(token_id);
        let grid = generate_grid(
            seed,
            self.config.width,
            self.config.height,
            self.config.palette.len(),
        );
        let runs = encode_runs(&grid);
        let document = render(
            &runs,
            &self.config.palette,
            self.config.cell_size,
            self.config.background,
        )?;
        let svg = document.to_svg_string();

        let run_count = total_runs(&runs);
        let over_budget = self
            .config
            .run_budget
            .is_some_and(|budget| run_count > budget as usize);
        if over_budget {
            tracing::warn!(
                token_id,
                run_count,
                budget = self.config.run_budget,
                "run count exceeds soft budget"
            );
        }

        let stats = ImageStats {
            run_count,
            rect_count: document.rects.len(),
            longest_run: longest_run(&runs),
            svg_bytes: svg.len(),
            over_budget,
        };
        tracing::debug!(seed, run_count, svg_bytes = stats.svg_bytes, "token rendered");

        Ok(RenderedToken {
            token_id,
            seed,
            grid,
            runs,
            document,
            svg,
            stats,
        })
    }

    /// The vector document for a token.
    pub fn get_image(&self, token_id: TokenId) -> Result<VectorDocument, RenderError> {
        Ok(self.render_token(token_id)?.document)
    }

    /// The SVG text for a token.
    pub fn get_svg(&self, token_id: TokenId) -> Result<String, RenderError> {
        Ok(self.render_token(token_id)?.svg)
    }

    /// The metadata document for a token.
    pub fn get_metadata(&self, token_id: TokenId) -> Result<MetadataDocument, RenderError> {
        let rendered = self.render_token(token_id)?;
        Ok(build_metadata(
            token_id,
            &rendered.grid,
            &rendered.runs,
            &rendered.svg,
            &self.config,
        ))
    }

    /// The metadata document as a `data:application/json;base64,` URI.
    pub fn token_uri(&self, token_id: TokenId) -> Result<String, RenderError> {
        Ok(self.get_metadata(token_id)?.to_data_uri()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{TRAIT_LONGEST_RUN, TRAIT_RUN_COUNT};
    use bitmapnft_model::{AttributeValue, Color, ConfigErrorCode, Palette};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_palette_refuses_to_start() {
        let config = RenderConfig {
            palette: Palette::new(vec![]),
            ..RenderConfig::default()
        };
        match BitmapRenderer::new(config) {
            Err(RenderError::Config(err)) => assert_eq!(err.code, ConfigErrorCode::EmptyPalette),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_image_is_deterministic() {
        let renderer = BitmapRenderer::new(RenderConfig::default()).unwrap();
        assert_eq!(renderer.get_svg(1).unwrap(), renderer.get_svg(1).unwrap());
        assert_eq!(renderer.get_image(1).unwrap(), renderer.get_image(1).unwrap());
    }

    #[test]
    fn test_render_token_consistency() {
        let renderer = BitmapRenderer::new(RenderConfig::default()).unwrap();
        let rendered = renderer.render_token(5).unwrap();

        assert_eq!(rendered.grid, renderer.grid(5));
        assert_eq!(rendered.runs, encode_runs(&rendered.grid));
        assert_eq!(rendered.svg, rendered.document.to_svg_string());
        assert_eq!(rendered.stats.rect_count, rendered.stats.run_count);
        assert_eq!(rendered.stats.svg_bytes, rendered.svg.len());
        assert_eq!(rendered.document.width, 160);
        assert_eq!(rendered.document.height, 160);
    }

    #[test]
    fn test_budget_is_soft() {
        let config = RenderConfig {
            run_budget: Some(1),
            ..RenderConfig::default()
        };
        let renderer = BitmapRenderer::new(config).unwrap();
        let rendered = renderer.render_token(3).unwrap();
        assert!(rendered.stats.over_budget);
        assert_eq!(rendered.stats.rect_count, rendered.stats.run_count);

        let config = RenderConfig {
            run_budget: None,
            ..RenderConfig::default()
        };
        let renderer = BitmapRenderer::new(config).unwrap();
        assert!(!renderer.render_token(3).unwrap().stats.over_budget);
    }

    #[test]
    fn test_metadata_for_unminted_id() {
        let renderer = BitmapRenderer::new(RenderConfig::default()).unwrap();
        let meta = renderer.get_metadata(TokenId::MAX).unwrap();
        assert_eq!(meta.name, format!("Bitmap #{}", TokenId::MAX));
        assert!(!meta.description.is_empty());
        assert_eq!(meta.attributes.len(), 4);
    }

    #[test]
    fn test_token_uri_round_trip() {
        let renderer = BitmapRenderer::new(RenderConfig::default()).unwrap();
        let uri = renderer.token_uri(1).unwrap();
        let decoded = MetadataDocument::from_data_uri(&uri).unwrap();
        assert_eq!(decoded, renderer.get_metadata(1).unwrap());
        assert_eq!(decoded.decode_image().unwrap(), renderer.get_svg(1).unwrap());
    }

    #[test]
    fn test_single_color_palette_one_run_per_row() {
        let config = RenderConfig {
            width: 8,
            height: 4,
            palette: Palette::new(vec![Color::rgb(10, 20, 30)]),
            ..RenderConfig::default()
        };
        let renderer = BitmapRenderer::new(config).unwrap();
        let doc = renderer.get_image(9).unwrap();
        assert_eq!(doc.rects.len(), 4);
        assert!(doc
            .rects
            .iter()
            .all(|r| r.width == 80 && r.fill == Color::rgb(10, 20, 30)));
    }

    #[test]
    fn test_metadata_traits_match_rendered_runs() {
        let renderer = BitmapRenderer::new(RenderConfig::default()).unwrap();
        let rendered = renderer.render_token(12).unwrap();
        let meta = renderer.get_metadata(12).unwrap();

        assert_eq!(
            meta.attribute(TRAIT_RUN_COUNT),
            Some(&AttributeValue::Number(rendered.stats.run_count as u64))
        );
        assert_eq!(
            meta.attribute(TRAIT_LONGEST_RUN),
            Some(&AttributeValue::Number(rendered.stats.longest_run as u64))
        );
        assert_eq!(meta.decode_image().unwrap(), rendered.svg);
    }

    #[test]
    fn test_inspect_json_omits_svg_text() {
        let renderer = BitmapRenderer::new(RenderConfig::default()).unwrap();
        let json = serde_json::to_value(renderer.render_token(2).unwrap()).unwrap();
        assert!(json.get("svg").is_none());
        assert!(json["stats"]["svg_bytes"].as_u64().unwrap() > 0);
    }
}
