use anyhow::Result;
use log::trace;

use crate::binding::RendererBinding;
use crate::coords::{BoundingBox, ColorRgba};
use crate::engine::RenderParams;
use crate::host::{AttribMask, Capability, CullMode, DisplayStyle, DrawContext, GlState, MatrixMode};
use crate::pass::{pass_render_params, DrawPass};

use super::{draw_box, AttribScope, CameraState, LightingScope, MatrixScope};

/// Executes a whole batch of passes on the modern command-buffer viewport.
pub struct ModernDispatcher<'a> {
    binding: &'a mut RendererBinding,
}

impl<'a> ModernDispatcher<'a> {
    pub fn new(binding: &'a mut RendererBinding) -> Self {
        Self { binding }
    }

    /// Draws `passes` in order, in a single host draw callback.
    ///
    /// Returns without touching host state when:
    /// - there is no active renderer session or no state manager
    /// - the display style is empty
    /// - Xray mode is on and the rasterizer culls front faces (the host draws
    ///   Xray objects twice; this is the redundant call)
    /// - the session's drawing API is not GL
    /// - no renderer is bound
    ///
    /// Batch-wide rules:
    /// - wireframe display mode turns smooth-shaded passes into wireframe passes
    /// - viewport lighting is set up once when the batch is shaded
    /// - bounding-box display mode suppresses geometry passes and draws the
    ///   object's box instead
    pub fn execute<C: DrawContext + ?Sized>(
        &mut self,
        passes: &[DrawPass],
        ctx: &mut C,
        params: RenderParams,
    ) -> Result<()> {
        let Some(api) = ctx.renderer_session() else {
            trace!("modern draw skipped: no renderer session");
            return Ok(());
        };
        if !ctx.has_state_manager() {
            trace!("modern draw skipped: no state manager");
            return Ok(());
        }

        let style = ctx.display_style();
        if style.is_empty() {
            return Ok(());
        }
        if style.contains(DisplayStyle::XRAY) && ctx.cull_mode() == Some(CullMode::Front) {
            trace!("modern draw skipped: redundant xray front-cull call");
            return Ok(());
        }
        if !api.is_opengl() {
            trace!("modern draw skipped: unsupported draw api {api:?}");
            return Ok(());
        }

        let Some(renderer) = self.binding.active_mut() else {
            trace!("modern draw skipped: no renderer bound");
            return Ok(());
        };

        let wireframe = style.contains(DisplayStyle::WIREFRAME);
        let bounds_only = style.contains(DisplayStyle::BOUNDING_BOX);

        let mut attribs = AttribScope::push(ctx, AttribMask::LIGHTING | AttribMask::CURRENT);
        let camera = CameraState::from_draw_context(&*attribs);

        let mut lit = LightingScope::setup_if(&mut *attribs, !wireframe && !bounds_only);
        renderer.set_camera_state(&camera);
        renderer.set_lighting_state_from_gl();

        let mut drew_bounds = false;
        for pass in passes {
            let pass = if wireframe {
                pass.downgraded_to_wireframe()
            } else {
                *pass
            };

            match pass_render_params(pass.kind, params, pass.wireframe_color) {
                Some(_) if bounds_only => {}
                Some(params) => renderer.render(&params)?,
                None => {
                    if let Some(bounds) = pass.bounds.or_else(|| lit.object_bounds()) {
                        draw_bounds(&mut *lit, &camera, &bounds, pass.wireframe_color);
                        drew_bounds = true;
                    }
                }
            }
        }

        if bounds_only && !drew_bounds {
            if let Some(bounds) = lit.object_bounds() {
                let color = lit.wireframe_color();
                draw_bounds(&mut *lit, &camera, &bounds, color);
            }
        }

        Ok(())
    }
}

/// Box drawn directly with the batch camera, outside the engine.
fn draw_bounds<G: GlState + ?Sized>(
    gl: &mut G,
    camera: &CameraState,
    bounds: &BoundingBox,
    color: ColorRgba,
) {
    let mut attribs = AttribScope::push(gl, AttribMask::ENABLE | AttribMask::CURRENT);
    attribs.disable(Capability::Lighting);

    let mut projection = MatrixScope::push(&mut *attribs, MatrixMode::Projection);
    projection.load_matrix(camera.projection.as_array());
    let mut model_view = MatrixScope::push(&mut *projection, MatrixMode::ModelView);
    model_view.load_matrix(camera.view.as_array());

    model_view.set_color(color.as_array());
    draw_box(&mut *model_view, bounds);
}
