//! Boundary to the token registry that owns minting.
//!
//! The renderer itself is total over token ids. A registry can be placed in
//! front of it to refuse ids that have not been minted.

use std::collections::BTreeSet;
use std::fmt;

use bitmapnft_model::{MetadataDocument, TokenId};

use crate::error::{RegistryError, RenderError};
use crate::render::{BitmapRenderer, RenderedToken};
use crate::svg::VectorDocument;

/// Answers whether a token id exists.
pub trait TokenRegistry: fmt::Debug {
    fn contains(&self, token_id: TokenId) -> bool;
}

impl<T: TokenRegistry + ?Sized> TokenRegistry for Box<T> {
    fn contains(&self, token_id: TokenId) -> bool {
        (**self).contains(token_id)
    }
}

/// Registry that knows every id.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenRegistry;

impl TokenRegistry for OpenRegistry {
    fn contains(&self, _token_id: TokenId) -> bool {
        true
    }
}

/// In-memory set of minted ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintedSet {
    ids: BTreeSet<TokenId>,
}

impl MintedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mint. Returns `false` if the id was already minted.
    pub fn mint(&mut self, token_id: TokenId) -> bool {
        self.ids.insert(token_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<TokenId> for MintedSet {
    fn from_iter<I: IntoIterator<Item = TokenId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl TokenRegistry for MintedSet {
    fn contains(&self, token_id: TokenId) -> bool {
        self.ids.contains(&token_id)
    }
}

/// A renderer that only answers for ids its registry knows.
#[derive(Debug, Clone)]
pub struct GatedRenderer<R> {
    renderer: BitmapRenderer,
    registry: R,
}

impl<R: TokenRegistry> GatedRenderer<R> {
    pub fn new(renderer: BitmapRenderer, registry: R) -> Self {
        Self { renderer, registry }
    }

    pub fn renderer(&self) -> &BitmapRenderer {
        &self.renderer
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    fn check(&self, token_id: TokenId) -> Result<(), RegistryError> {
        if self.registry.contains(token_id) {
            Ok(())
        } else {
            tracing::debug!(token_id, "query for unregistered token");
            Err(RegistryError::UnknownToken(token_id))
        }
    }

    pub fn render_token(&self, token_id: TokenId) -> Result<RenderedToken, RenderError> {
        self.check(token_id)?;
        self.renderer.render_token(token_id)
    }

    pub fn get_image(&self, token_id: TokenId) -> Result<VectorDocument, RenderError> {
        self.check(token_id)?;
        self.renderer.get_image(token_id)
    }

    pub fn get_svg(&self, token_id: TokenId) -> Result<String, RenderError> {
        self.check(token_id)?;
        self.renderer.get_svg(token_id)
    }

    pub fn get_metadata(&self, token_id: TokenId) -> Result<MetadataDocument, RenderError> {
        self.check(token_id)?;
        self.renderer.get_metadata(token_id)
    }

    pub fn token_uri(&self, token_id: TokenId) -> Result<String, RenderError> {
        self.check(token_id)?;
        self.renderer.token_uri(token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmapnft_model::RenderConfig;

    fn renderer() -> BitmapRenderer {
        BitmapRenderer::new(RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_open_registry_accepts_everything() {
        let gated = GatedRenderer::new(renderer(), OpenRegistry);
        assert!(gated.get_svg(0).is_ok());
        assert!(gated.get_metadata(TokenId::MAX).is_ok());
    }

    #[test]
    fn test_minted_set_gates_queries() {
        let mut gated = GatedRenderer::new(renderer(), MintedSet::new());
        assert!(matches!(
            gated.get_svg(1),
            Err(RenderError::Registry(RegistryError::UnknownToken(1)))
        ));
        assert!(matches!(
            gated.token_uri(1),
            Err(RenderError::Registry(RegistryError::UnknownToken(1)))
        ));

        assert!(gated.registry_mut().mint(1));
        assert!(!gated.registry_mut().mint(1));
        assert_eq!(
            gated.get_svg(1).unwrap(),
            gated.renderer().get_svg(1).unwrap()
        );
        assert!(gated.get_image(2).is_err());
    }

    #[test]
    fn test_gating_does_not_change_output() {
        let minted: MintedSet = [4, 5].into_iter().collect();
        assert_eq!(minted.len(), 2);
        let gated = GatedRenderer::new(renderer(), minted);
        assert_eq!(
            gated.get_metadata(4).unwrap(),
            renderer().get_metadata(4).unwrap()
        );
    }

    #[test]
    fn test_boxed_registry_is_debug() {
        let registry: Box<dyn TokenRegistry> = Box::new([7].into_iter().collect::<MintedSet>());
        let gated = GatedRenderer::new(renderer(), registry);
        assert!(format!("{:?}", gated).contains("MintedSet"));
        assert!(gated.render_token(8).is_err());
    }
}
