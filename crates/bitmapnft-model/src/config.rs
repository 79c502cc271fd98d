//! Render configuration and its setup-time validation.
//!
//! Every field here changes the deterministic mapping from token id to
//! image, so a configuration is fixed for the lifetime of a renderer.

use serde::{Deserialize, Serialize};

use crate::color::{Color, Palette};
use crate::error::{ConfigError, ConfigErrorCode};

/// Largest grid edge, in cells.
pub const MAX_GRID_DIMENSION: u32 = 256;

/// Largest palette a grid cell (`u8`) can index.
pub const MAX_PALETTE_SIZE: usize = 256;

/// Default grid width, in cells.
pub const DEFAULT_WIDTH: u32 = 16;

/// Default grid height, in cells.
pub const DEFAULT_HEIGHT: u32 = 16;

/// Default edge length of one cell in SVG user units.
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// Default seed salt.
pub const DEFAULT_SALT: &str = "bitmapnft";

/// Default token name prefix; names render as `"<prefix> #<id>"`.
pub const DEFAULT_NAME_PREFIX: &str = "Bitmap";

/// Default token description.
pub const DEFAULT_DESCRIPTION: &str =
    "A pixel-art bitmap generated entirely from its token id. No off-chain storage.";

/// Configuration for a renderer.
///
/// Missing fields fall back to [`RenderConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Edge length of one cell in SVG user units.
    pub cell_size: u32,
    /// Ordered palette; grid cells index into it.
    pub palette: Palette,
    /// Canvas background color.
    pub background: Color,
    /// Salt mixed into seed derivation.
    pub salt: String,
    /// Token name prefix.
    pub name_prefix: String,
    /// Description attached to every metadata document.
    pub description: String,
    /// Soft ceiling on total runs per image. Exceeding it is logged, never rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_budget: Option<u32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            palette: Palette::new(vec![
                Color::white(),
                Color::black(),
                Color::rgb(0xff, 0x00, 0x00),
                Color::rgb(0x00, 0x00, 0xff),
            ]),
            background: Color::white(),
            salt: DEFAULT_SALT.to_string(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            run_budget: Some(DEFAULT_WIDTH * DEFAULT_HEIGHT * 7 / 8),
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from JSON. The result is not yet validated.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Canvas width in SVG user units.
    ///
    /// Only meaningful after [`validate`](Self::validate) has succeeded.
    pub fn canvas_width(&self) -> u32 {
        self.width.saturating_mul(self.cell_size)
    }

    /// Canvas height in SVG user units.
    pub fn canvas_height(&self) -> u32 {
        self.height.saturating_mul(self.cell_size)
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check the configuration once at setup.
    ///
    /// # Returns
    /// * `Ok(())` if a renderer may be built from this configuration
    /// * `Err(ConfigError)` for the first violated constraint
    ///
    /// # Example
    /// ```
    /// use bitmapnft_model::{Palette, RenderConfig};
    ///
    /// assert!(RenderConfig::default().validate().is_ok());
    ///
    /// let empty = RenderConfig {
    ///     palette: Palette::new(vec![]),
    ///     ..RenderConfig::default()
    /// };
    /// assert!(empty.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::new(
                ConfigErrorCode::EmptyPalette,
                "palette",
                "palette must contain at least one color",
            ));
        }

        if self.palette.len() > MAX_PALETTE_SIZE {
            return Err(ConfigError::new(
                ConfigErrorCode::PaletteTooLarge,
                "palette",
                format!(
                    "palette has {} colors, max is {}",
                    self.palette.len(),
                    MAX_PALETTE_SIZE
                ),
            ));
        }

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::new(
                ConfigErrorCode::ZeroDimension,
                if self.width == 0 { "width" } else { "height" },
                format!(
                    "grid must be at least 1x1, got {}x{}",
                    self.width, self.height
                ),
            ));
        }

        if self.width > MAX_GRID_DIMENSION || self.height > MAX_GRID_DIMENSION {
            return Err(ConfigError::new(
                ConfigErrorCode::DimensionTooLarge,
                if self.width > MAX_GRID_DIMENSION { "width" } else { "height" },
                format!(
                    "grid is too large: max is {}x{}, got {}x{}",
                    MAX_GRID_DIMENSION, MAX_GRID_DIMENSION, self.width, self.height
                ),
            ));
        }

        if self.cell_size == 0 {
            return Err(ConfigError::new(
                ConfigErrorCode::ZeroCellSize,
                "cell_size",
                "cell size must be at least 1",
            ));
        }

        if self.width.checked_mul(self.cell_size).is_none()
            || self.height.checked_mul(self.cell_size).is_none()
        {
            return Err(ConfigError::new(
                ConfigErrorCode::DimensionTooLarge,
                "cell_size",
                format!(
                    "canvas {}x{} cells at cell size {} overflows u32",
                    self.width, self.height, self.cell_size
                ),
            ));
        }

        if self.name_prefix.trim().is_empty() {
            return Err(ConfigError::new(
                ConfigErrorCode::EmptyText,
                "name_prefix",
                "name prefix must not be empty",
            ));
        }

        if self.description.trim().is_empty() {
            return Err(ConfigError::new(
                ConfigErrorCode::EmptyText,
                "description",
                "description must not be empty",
            ));
        }

        Ok(())
    }
}
