//! Configuration loading and the renderer every command queries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bitmapnft_backend_svg::{
    BitmapRenderer, GatedRenderer, MintedSet, OpenRegistry, TokenRegistry,
};
use bitmapnft_model::{RenderConfig, TokenId};

/// A validated renderer behind the registry chosen on the command line.
pub type Session = GatedRenderer<Box<dyn TokenRegistry>>;

/// Load a configuration file, or the defaults when no path is given.
///
/// The result is not yet validated.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    RenderConfig::from_json(&json)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Build the session for a command.
///
/// # Arguments
/// * `config_path` - Optional JSON configuration file
/// * `minted` - When non-empty, only these ids may be queried
pub fn open(config_path: Option<&Path>, minted: &[TokenId]) -> Result<Session> {
    let config = load_config(config_path)?;
    let renderer = BitmapRenderer::new(config).context("Renderer refused to start")?;

    let registry: Box<dyn TokenRegistry> = if minted.is_empty() {
        Box::new(OpenRegistry)
    } else {
        Box::new(minted.iter().copied().collect::<MintedSet>())
    };

    Ok(GatedRenderer::new(renderer, registry))
}
