use crate::coords::{Mat4, Viewport};
use crate::host::{DrawContext, LegacyView};

/// Camera matrices and viewport pulled from the host for one draw or pick.
///
/// Always extracted fresh; never cached across calls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    pub view: Mat4,
    pub projection: Mat4,
    pub world: Mat4,
    pub viewport: Viewport,
}

impl CameraState {
    /// The legacy view has no separate object matrix; world is identity.
    pub fn from_legacy_view<V: LegacyView + ?Sized>(view: &V) -> Self {
        Self {
            view: view.model_view_matrix(),
            projection: view.projection_matrix(),
            world: Mat4::IDENTITY,
            viewport: view.viewport(),
        }
    }

    pub fn from_draw_context<C: DrawContext + ?Sized>(ctx: &C) -> Self {
        Self {
            view: ctx.world_view_matrix(),
            projection: ctx.draw_projection_matrix(),
            world: ctx.world_matrix(),
            viewport: ctx.draw_viewport(),
        }
    }
}
