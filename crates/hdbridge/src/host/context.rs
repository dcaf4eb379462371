use crate::coords::{BoundingBox, ColorRgba, Mat4, Viewport};

use super::{DisplayStyle, GlState};

/// Rasterizer face culling currently bound by the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CullMode {
    None,
    Front,
    Back,
}

/// Drawing API backing the host's active renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawApi {
    OpenGl,
    OpenGlCoreProfile,
    DirectX11,
}

impl DrawApi {
    #[inline]
    pub fn is_opengl(self) -> bool {
        matches!(self, Self::OpenGl | Self::OpenGlCoreProfile)
    }
}

/// Per-draw context of the modern command-buffer viewport.
pub trait DrawContext: GlState {
    /// Drawing API of the active renderer session, or `None` without one.
    fn renderer_session(&self) -> Option<DrawApi>;

    fn has_state_manager(&self) -> bool;

    /// Rasterizer cull mode, if a rasterizer state is bound.
    fn cull_mode(&self) -> Option<CullMode>;

    fn display_style(&self) -> DisplayStyle;

    fn world_view_matrix(&self) -> Mat4;
    fn draw_projection_matrix(&self) -> Mat4;
    fn world_matrix(&self) -> Mat4;
    fn draw_viewport(&self) -> Viewport;

    /// Bounds of the object being drawn, when the host tracks them.
    fn object_bounds(&self) -> Option<BoundingBox>;
    fn wireframe_color(&self) -> ColorRgba;

    /// Loads the viewport's lights into GL state.
    fn setup_lighting(&mut self);
    /// Inverse of [`setup_lighting`](Self::setup_lighting).
    fn unset_lighting(&mut self);
}
