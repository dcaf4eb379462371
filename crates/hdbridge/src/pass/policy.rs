use crate::coords::{BoundingBox, ColorRgba};
use crate::host::DisplayStyle;

use super::{DrawPass, PassKind};

/// Builds the ordered draw passes for one object.
///
/// Rules, in order:
/// 1. Neither wireframe nor bounding-box style: one shaded pass (flat if the
///    style asks for flat shading, else smooth).
/// 2. Selected, or wireframe style: one wireframe pass.
///
/// The shaded pass always precedes the wireframe pass so the overlay draws on
/// top. Bounding-box display is left to the dispatchers.
pub fn build_passes(
    style: DisplayStyle,
    is_selected: bool,
    bounds: BoundingBox,
    wireframe_color: ColorRgba,
) -> Vec<DrawPass> {
    let mut passes = Vec::with_capacity(2);

    if !style.intersects(DisplayStyle::WIREFRAME | DisplayStyle::BOUNDING_BOX) {
        let kind = if style.contains(DisplayStyle::FLAT_SHADED) {
            PassKind::ShadedFlat
        } else {
            PassKind::ShadedSmooth
        };
        passes.push(DrawPass::new(kind, wireframe_color, Some(bounds)));
    }

    if is_selected || style.contains(DisplayStyle::WIREFRAME) {
        passes.push(DrawPass::wireframe(bounds, wireframe_color));
    }

    passes
}
