use anyhow::Result;
use log::trace;

use crate::binding::RendererBinding;
use crate::coords::ColorRgba;
use crate::engine::RenderParams;
use crate::host::{AttribMask, Capability, GlState, LegacyView, MatrixMode, ShapeGeometry};
use crate::pass::{pass_render_params, DrawPass};

use super::{draw_box, AttribScope, CameraState, EnableScope, GlScope, MatrixScope};

/// Executes single passes on the legacy immediate-mode view.
pub struct LegacyDispatcher<'a> {
    binding: &'a mut RendererBinding,
    srgb: bool,
}

impl<'a> LegacyDispatcher<'a> {
    pub fn new(binding: &'a mut RendererBinding) -> Self {
        Self { binding, srgb: true }
    }

    /// Toggle the sRGB framebuffer for the duration of each call (default on).
    #[must_use]
    pub fn with_srgb(mut self, enabled: bool) -> Self {
        self.srgb = enabled;
        self
    }

    /// Draws one pass.
    ///
    /// No-op when no renderer is bound; that check happens before any host
    /// state is touched.
    ///
    /// Wireframe and point passes take their override color from the view's
    /// *current* GL color, which the host sets before calling. The pass's own
    /// `wireframe_color` is not used on this path.
    ///
    /// Bounding-box passes read bounds from `geometry`; a missing or
    /// unbounded shape draws nothing.
    pub fn execute<V: LegacyView + ?Sized>(
        &mut self,
        pass: &DrawPass,
        geometry: Option<&dyn ShapeGeometry>,
        view: &mut V,
        params: RenderParams,
    ) -> Result<()> {
        let srgb = self.srgb;
        let Some(renderer) = self.binding.active_mut() else {
            trace!("legacy draw skipped: no renderer bound");
            return Ok(());
        };

        let mut gl = GlScope::begin(view);

        let camera = CameraState::from_legacy_view(&*gl);
        renderer.set_camera_state(&camera);
        renderer.set_lighting_state_from_gl();

        let mut attribs = AttribScope::push(
            &mut *gl,
            AttribMask::LIGHTING | AttribMask::CURRENT | AttribMask::ENABLE,
        );
        let mut state = EnableScope::on_if(&mut *attribs, Capability::FramebufferSrgb, srgb);
        state.enable(Capability::Lighting);

        let override_color = if pass.kind.is_unlit() {
            ColorRgba::from_array(state.current_color())
        } else {
            pass.wireframe_color
        };

        match pass_render_params(pass.kind, params, override_color) {
            Some(params) => {
                if !params.enable_lighting {
                    state.disable(Capability::Lighting);
                }
                renderer.render(&params)?;
            }
            None => draw_shape_bounds(&mut *state, geometry),
        }

        Ok(())
    }
}

fn draw_shape_bounds<G: GlState + ?Sized>(gl: &mut G, geometry: Option<&dyn ShapeGeometry>) {
    let Some(shape) = geometry.filter(|s| s.is_bounded()) else {
        trace!("bounding box skipped: shape is not boundable");
        return;
    };
    let bounds = shape.bounding_box();

    let mut enable = AttribScope::push(gl, AttribMask::ENABLE);
    enable.disable(Capability::Lighting);
    let mut model_view = MatrixScope::push(&mut *enable, MatrixMode::ModelView);
    draw_box(&mut *model_view, &bounds);
}
