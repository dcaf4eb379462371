use crate::coords::ColorRgba;
use crate::engine::{CullStyle, DrawMode, RenderParams};

use super::PassKind;

/// Render parameters for an engine-drawn pass.
///
/// Returns `None` for [`PassKind::BoundingBox`], which the dispatchers draw
/// themselves. `override_color` is applied to unlit kinds only; shaded kinds
/// take their color from materials.
pub fn pass_render_params(
    kind: PassKind,
    base: RenderParams,
    override_color: ColorRgba,
) -> Option<RenderParams> {
    let params = match kind {
        PassKind::Wireframe | PassKind::Points => RenderParams {
            draw_mode: if kind == PassKind::Wireframe {
                DrawMode::Wireframe
            } else {
                DrawMode::Points
            },
            enable_lighting: false,
            cull_style: CullStyle::Nothing,
            override_color: Some(override_color),
            ..base
        },
        PassKind::ShadedFlat | PassKind::ShadedSmooth => RenderParams {
            draw_mode: if kind == PassKind::ShadedFlat {
                DrawMode::ShadedFlat
            } else {
                DrawMode::ShadedSmooth
            },
            enable_lighting: true,
            cull_style: CullStyle::BackUnlessDoubleSided,
            override_color: None,
            ..base
        },
        PassKind::BoundingBox => return None,
    };
    Some(params)
}
