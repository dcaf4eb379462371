//! Host-facing facade.

use anyhow::Result;

use crate::binding::RendererBinding;
use crate::config::BridgeConfig;
use crate::coords::{BoundingBox, ColorRgba, Vec3};
use crate::dispatch::{LegacyDispatcher, ModernDispatcher};
use crate::engine::{EngineFactory, RenderParams};
use crate::host::{DisplayStatus, DisplayStyle, DrawContext, LegacyView, ShapeGeometry};
use crate::pass::{build_passes, DrawPass};
use crate::pick::PickTester;
use crate::scope::{ScenePath, SceneScope};

/// Draws one scene scope into the host viewport through an imaging engine.
///
/// Owned by the host's shape node; one instance per drawn object. All calls
/// come from the host's render thread.
pub struct HdRenderer {
    binding: RendererBinding,
    config: BridgeConfig,
}

impl HdRenderer {
    pub fn new(factory: impl EngineFactory + 'static, config: BridgeConfig) -> Self {
        Self {
            binding: RendererBinding::new(factory),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// Base render parameters derived from the configuration.
    pub fn default_params(&self) -> RenderParams {
        self.config.default_params()
    }

    /// Rebinds the engine if `root` / `exclude_paths` changed since last call.
    ///
    /// `root == None` (unresolved scene root) releases the engine.
    pub fn check_renderer_setup(
        &mut self,
        root: Option<&ScenePath>,
        exclude_paths: &[ScenePath],
    ) -> Result<()> {
        let scope = root.map(|root| SceneScope::new(root.clone(), exclude_paths.iter().cloned()));
        self.binding.ensure_bound(scope)
    }

    /// Default passes for an object with the given display state.
    pub fn generate_default_passes(
        &self,
        style: DisplayStyle,
        status: DisplayStatus,
        bounds: BoundingBox,
        wireframe_color: ColorRgba,
    ) -> Vec<DrawPass> {
        let style = if self.config.flat_shading_supported {
            style
        } else {
            style.without(DisplayStyle::FLAT_SHADED)
        };
        build_passes(style, status.is_selected(), bounds, wireframe_color)
    }

    /// Draws one pass on the legacy view. See [`LegacyDispatcher::execute`].
    pub fn execute_legacy<V: LegacyView + ?Sized>(
        &mut self,
        pass: &DrawPass,
        geometry: Option<&dyn ShapeGeometry>,
        view: &mut V,
        params: RenderParams,
    ) -> Result<()> {
        LegacyDispatcher::new(&mut self.binding)
            .with_srgb(self.config.enable_srgb_legacy)
            .execute(pass, geometry, view, params)
    }

    /// Draws a batch on the modern viewport. See [`ModernDispatcher::execute`].
    pub fn execute_modern<C: DrawContext + ?Sized>(
        &mut self,
        passes: &[DrawPass],
        ctx: &mut C,
        params: RenderParams,
    ) -> Result<()> {
        ModernDispatcher::new(&mut self.binding).execute(passes, ctx, params)
    }

    /// Hit-tests the pick region. See [`PickTester::test_intersection`].
    pub fn test_intersection<V: LegacyView + ?Sized>(
        &mut self,
        view: &mut V,
        params: RenderParams,
    ) -> Result<Option<Vec3>> {
        PickTester::new(&mut self.binding).test_intersection(view, params)
    }
}
