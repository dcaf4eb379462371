//! Hit-testing through the bound engine.

use anyhow::Result;
use log::trace;

use crate::binding::RendererBinding;
use crate::coords::{Mat4, Vec3};
use crate::dispatch::SelectScope;
use crate::engine::{DrawMode, RenderParams};
use crate::host::{LegacyView, MatrixMode};

/// Intersects the pick region under the cursor with the bound scene.
pub struct PickTester<'a> {
    binding: &'a mut RendererBinding,
}

impl<'a> PickTester<'a> {
    pub fn new(binding: &'a mut RendererBinding) -> Self {
        Self { binding }
    }

    /// Returns the engine's hit point, or `None` for no hit.
    ///
    /// The host's selection pass is entered only to let it load the pick
    /// region's view and projection into the GL matrix stacks; both are read
    /// back before the pass ends. Nothing is drawn into the selection buffer.
    ///
    /// Draw mode is forced to geometry-only regardless of display style.
    pub fn test_intersection<V: LegacyView + ?Sized>(
        &mut self,
        view: &mut V,
        params: RenderParams,
    ) -> Result<Option<Vec3>> {
        let Some(renderer) = self.binding.active_mut() else {
            trace!("pick skipped: no renderer bound");
            return Ok(None);
        };

        let (pick_view, pick_projection) = {
            let select = SelectScope::begin(view);
            (
                Mat4::from_array(select.matrix(MatrixMode::ModelView)),
                Mat4::from_array(select.matrix(MatrixMode::Projection)),
            )
        };

        let params = RenderParams {
            draw_mode: DrawMode::GeomOnly,
            ..params
        };
        renderer.test_intersection(&pick_view, &pick_projection, &Mat4::IDENTITY, &params)
    }
}
