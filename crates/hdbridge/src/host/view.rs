use crate::coords::{BoundingBox, Mat4, Viewport};

use super::GlState;

/// Legacy immediate-mode 3D view.
pub trait LegacyView: GlState {
    /// Makes the view's GL context current for immediate drawing.
    fn begin_gl(&mut self);
    fn end_gl(&mut self);

    fn model_view_matrix(&self) -> Mat4;
    fn projection_matrix(&self) -> Mat4;
    fn viewport(&self) -> Viewport;

    /// Enters a GL selection pass for the region under the cursor.
    ///
    /// While active, the GL matrix stacks hold the pick-region view and
    /// projection rather than the camera's.
    fn begin_select(&mut self);
    fn end_select(&mut self);
}

/// Geometry payload attached to a legacy draw request.
pub trait ShapeGeometry {
    /// Shapes can opt out of bounds entirely (e.g. infinite planes).
    fn is_bounded(&self) -> bool;
    fn bounding_box(&self) -> BoundingBox;
}
